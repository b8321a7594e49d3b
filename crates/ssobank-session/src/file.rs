//! On-disk session store
//!
//! The persisted document holds exactly one key, `accessToken`. The file is
//! read once when the store is opened; after that the in-memory copy is
//! authoritative and every write goes through to disk.

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::store::SessionStore;
use parking_lot::RwLock;
use ssobank_types::Session;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct FileSessionStore {
    path: PathBuf,
    session: RwLock<Session>,
}

impl FileSessionStore {
    /// Open the store, reading any persisted credential
    ///
    /// A missing file is a logged-out client. An unreadable or corrupt file
    /// is logged and also treated as logged out.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let session = match Self::load(&path) {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring unreadable session file");
                Session::anonymous()
            }
        };
        tracing::debug!(
            path = %path.display(),
            authenticated = session.is_authenticated(),
            "Opened session store"
        );

        Self {
            path,
            session: RwLock::new(session),
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::open(config.path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted session without touching the in-memory copy
    pub fn load(path: &Path) -> SessionResult<Session> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Session::anonymous())
            }
            Err(source) => {
                return Err(SessionError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let stored: Session =
            serde_json::from_slice(&bytes).map_err(|source| SessionError::Corrupt {
                path: path.to_path_buf(),
                source,
            })?;

        // Normalise blank tokens written by hand
        Ok(match stored.access_token {
            Some(token) => Session::with_token(token),
            None => Session::anonymous(),
        })
    }

    fn persist(&self, session: &Session) -> SessionResult<()> {
        let write_err = |source| SessionError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let body = serde_json::to_vec(session).map_err(|source| SessionError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        // Write beside the target and rename so a crash never leaves half a token
        let tmp = self.path.with_extension("json.tmp");
        let mut file = open_private(&tmp).map_err(write_err)?;
        file.write_all(&body).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)
    }

    fn remove(&self) -> SessionResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Session {
        self.session.read().clone()
    }

    fn set(&self, token: &str) {
        let session = Session::with_token(token);
        if !session.is_authenticated() {
            return self.clear();
        }

        let mut current = self.session.write();
        if let Err(err) = self.persist(&session) {
            tracing::warn!(error = %err, "Session token kept in memory only");
        }
        *current = session;
        tracing::info!("Session credential stored");
    }

    fn clear(&self) {
        let mut current = self.session.write();
        if let Err(err) = self.remove() {
            tracing::warn!(error = %err, "Stale session file left on disk");
        }
        *current = Session::anonymous();
        tracing::info!("Session credential cleared");
    }
}

#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}
