//! Session persistence errors
//!
//! These never escape the `SessionStore` contract: `get` falls back to an
//! anonymous session and `set`/`clear` log them. They are public so that
//! callers inspecting a `FileSessionStore` directly can see what went wrong.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for session persistence
pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Session file could not be read
    #[error("failed to read session file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Session file could not be written or replaced
    #[error("failed to write session file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Session file could not be removed
    #[error("failed to remove session file {}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Session file exists but is not a valid session document
    #[error("session file {} is corrupt", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No data directory could be determined and no path was configured
    #[error("no data directory available for the session file")]
    NoDataDir,
}
