//! The session store contract and its in-memory implementation

use parking_lot::RwLock;
use ssobank_types::Session;
use std::sync::Arc;

/// Holder of the current access credential
///
/// `get` never fails; an empty or unreadable store reads as anonymous.
/// `set` and `clear` take effect before they return, so the very next `get`
/// observes them. There is no cross-call transaction: when two writers race,
/// the last write wins.
pub trait SessionStore: Send + Sync {
    /// Current session
    fn get(&self) -> Session;

    /// Replace the stored credential
    ///
    /// A blank token is equivalent to `clear`.
    fn set(&self, token: &str);

    /// Drop the stored credential
    fn clear(&self);

    fn is_authenticated(&self) -> bool {
        self.get().is_authenticated()
    }
}

impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    fn get(&self) -> Session {
        (**self).get()
    }

    fn set(&self, token: &str) {
        (**self).set(token)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// Process-local session store
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RwLock<Session>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token
    pub fn with_token(token: &str) -> Self {
        Self {
            session: RwLock::new(Session::with_token(token)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Session {
        self.session.read().clone()
    }

    fn set(&self, token: &str) {
        *self.session.write() = Session::with_token(token);
    }

    fn clear(&self) {
        *self.session.write() = Session::anonymous();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_is_anonymous() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get(), Session::anonymous());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_set_then_clear_is_immediately_visible() {
        let store = MemorySessionStore::new();
        store.set("T1");
        assert_eq!(store.get().token(), Some("T1"));

        store.set("T2");
        assert_eq!(store.get().token(), Some("T2"));

        store.clear();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_blank_set_clears() {
        let store = MemorySessionStore::with_token("T1");
        store.set("  ");
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_shared_through_arc() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let other = Arc::clone(&store);
        store.set("T1");
        assert_eq!(other.get().token(), Some("T1"));
        other.clear();
        assert!(!store.is_authenticated());
    }
}
