//! Stale-response guard
//!
//! A view that starts a load takes a ticket. Starting another load or
//! discarding the view bumps the generation, and any ticket from an earlier
//! generation can no longer apply its result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct ViewGuard {
    generation: Arc<AtomicU64>,
}

impl ViewGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, superseding every outstanding ticket
    pub fn begin(&self) -> ViewTicket {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        ViewTicket {
            generation,
            current: Arc::clone(&self.generation),
        }
    }

    /// The view was discarded
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

#[derive(Debug, Clone)]
pub struct ViewTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl ViewTicket {
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::Acquire) == self.generation
    }

    /// Hand back `value` only if this ticket is still current
    pub fn apply<T>(&self, value: T) -> Option<T> {
        self.is_current().then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ticket_is_current() {
        let guard = ViewGuard::new();
        let ticket = guard.begin();
        assert!(ticket.is_current());
        assert_eq!(ticket.apply(5), Some(5));
    }

    #[test]
    fn test_newer_load_supersedes() {
        let guard = ViewGuard::new();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert_eq!(first.apply("stale"), None);
    }

    #[test]
    fn test_invalidate_drops_everything() {
        let guard = ViewGuard::new();
        let ticket = guard.begin();
        guard.clone().invalidate();
        assert!(!ticket.is_current());
    }
}
