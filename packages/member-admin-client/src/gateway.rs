//! Persistence gateway seam and HTTP status interpretation.

use async_trait::async_trait;
use serde::Deserialize;

use member_admin_core::error::{AdminError, Result};
use member_admin_core::model::{MemberRecord, MemberSummary};

/// Member persistence against per-member REST resources.
///
/// Every call is attempted once; retrying is up to the operator.
#[async_trait]
pub trait MemberGateway: Send + Sync {
    /// `PUT <url>` with the record as JSON.
    async fn update(&self, url: &str, record: &MemberRecord) -> Result<()>;

    /// `DELETE <url>`.
    async fn delete(&self, url: &str) -> Result<()>;

    /// `GET` on the members collection.
    async fn list(&self) -> Result<Vec<MemberSummary>>;

    /// `GET <url>` for a single member.
    async fn fetch(&self, url: &str) -> Result<MemberSummary>;

    /// Path of the members collection, used to derive row URLs.
    fn collection_path(&self) -> &str;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Maps a response status to the gateway outcome.
///
/// 2xx is success, 403 is `AuthorizationDenied`, anything else is a
/// `RequestFailure` carrying the best message the body offers.
pub fn classify_status(status: u16, body: &str) -> Result<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let message = error_message(status, body);
    if status == 403 {
        return Err(AdminError::AuthorizationDenied(message));
    }
    Err(AdminError::RequestFailure { status, message })
}

/// `message` or `error` from a JSON body, else the raw body, else the
/// status reason phrase.
pub fn error_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error).filter(|m| !m.is_empty()) {
            return message;
        }
    }
    if !body.is_empty() && !body.starts_with('{') {
        return body.to_string();
    }
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown error")
        .to_string()
}
