//! Persistent client-side key-value store.
//!
//! Holds the tokens handed out by the authentication layer and operator
//! preferences, under the same keys the browser client uses.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{AdminError, Result};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const USER_EMAIL_KEY: &str = "userEmail";
pub const USER_ROLE_KEY: &str = "userRole";
pub const THEME_KEY: &str = "theme";

const AUTH_KEYS: [&str; 4] = [
    ACCESS_TOKEN_KEY,
    REFRESH_TOKEN_KEY,
    USER_EMAIL_KEY,
    USER_ROLE_KEY,
];

/// JSON-file backed string map.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl SessionStore {
    /// Opens the store at `path`. A missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AdminError::Session(format!("Corrupt session file {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(AdminError::Session(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        Ok(Self { path, entries })
    }

    /// Store that is never written to disk until `save`.
    pub fn in_memory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Drops tokens and identity, keeping preferences.
    pub fn clear_auth(&mut self) {
        for key in AUTH_KEYS {
            self.entries.remove(key);
        }
    }

    /// Bearer token for the backend, if logged in.
    pub fn access_token(&self) -> Option<&str> {
        self.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Writes the store to disk via a temp file and rename.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| AdminError::SerializationError(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| AdminError::Session(format!("Failed to create directory: {}", e)))?;
        }

        let mut temp_path = self.path.clone().into_os_string();
        temp_path.push(".tmp");
        let temp_path = PathBuf::from(temp_path);

        let written = write_synced(&temp_path, json.as_bytes()).and_then(|()| {
            fs::rename(&temp_path, &self.path).map_err(|e| {
                AdminError::Session(format!("Failed to rename session file: {}", e))
            })
        });
        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                tracing::debug!("Temp file {} not removed: {}", temp_path.display(), cleanup);
            }
            return Err(e);
        }

        tracing::debug!("Session saved to {}", self.path.display());
        Ok(())
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path)
        .map_err(|e| AdminError::Session(format!("Failed to create temp file: {}", e)))?;
    file.write_all(bytes)
        .map_err(|e| AdminError::Session(format!("Failed to write session: {}", e)))?;
    file.sync_all()
        .map_err(|e| AdminError::Session(format!("Failed to sync session: {}", e)))
}
