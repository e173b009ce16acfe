//! Admin client configuration.

use std::path::PathBuf;

use crate::validation::ValidationPolicy;

/// Admin client configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Base URL of the REST backend
    pub base_url: String,
    /// Path of the members collection, relative to `base_url`
    pub members_path: String,
    /// Request timeout in milliseconds. `None` waits for the backend.
    pub request_timeout_ms: Option<u64>,
    /// Session store file (tokens and preferences)
    pub session_file: PathBuf,
    /// Require a phone number on save
    pub require_phone: bool,
    /// Honour HTTP(S)_PROXY environment variables
    pub use_system_proxy: bool,
}

impl AdminConfig {
    /// Validation policy derived from this configuration.
    pub fn validation_policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            require_phone: self.require_phone,
        }
    }

    /// Absolute URL of the members collection.
    pub fn members_url(&self) -> String {
        join_url(&self.base_url, &self.members_path)
    }

    /// Resolves a member resource URL against the base URL.
    ///
    /// Absolute URLs are returned unchanged.
    pub fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            join_url(&self.base_url, url)
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            members_path: "/admin/members".to_string(),
            request_timeout_ms: None,
            session_file: PathBuf::from("./member-admin-session.json"),
            require_phone: false,
            use_system_proxy: true,
        }
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
