//! Session storage configuration

use crate::error::{SessionError, SessionResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the session file location
pub const SESSION_FILE_ENV: &str = "SSOBANK_SESSION_FILE";

const APP_DIR: &str = "ssobank";
const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Where the access credential is persisted
    pub path: PathBuf,
}

impl SessionConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location under the platform data directory
    pub fn default_path() -> SessionResult<PathBuf> {
        dirs_next::data_dir()
            .map(|dir| dir.join(APP_DIR).join(SESSION_FILE))
            .ok_or(SessionError::NoDataDir)
    }

    /// Create configuration from environment variables
    pub fn from_env() -> SessionResult<Self> {
        match std::env::var(SESSION_FILE_ENV) {
            Ok(path) if !path.trim().is_empty() => Ok(Self::new(path.trim())),
            _ => Self::default_path().map(Self::new),
        }
    }
}
