//! SSO Banking Session Layer
//!
//! Holds the single access credential the client uses to talk to the banking
//! service:
//!
//! - **SessionStore**: the contract every component reads the credential
//!   through (`get` / `set` / `clear`)
//! - **MemorySessionStore**: process-local store for tests and embedding
//! - **FileSessionStore**: persists one `accessToken` key on disk so the
//!   session survives restarts
//!
//! # Lifecycle
//!
//! ```text
//! process start ──► FileSessionStore::open (reads persisted token, if any)
//!                          │
//!        login success ──► set(token)
//!                          │
//!   logout / AuthExpired ─► clear()
//! ```
//!
//! Stores are injected as `Arc<dyn SessionStore>`; nothing reaches the
//! persisted value except through this trait.

pub mod config;
pub mod error;
pub mod file;
pub mod store;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use file::FileSessionStore;
pub use store::{MemorySessionStore, SessionStore};

pub use ssobank_types::Session;
