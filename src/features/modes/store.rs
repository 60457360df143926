//! Per-user mode selection
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial release, DashMap keyed by Telegram user id

use dashmap::DashMap;
use std::sync::Arc;

use super::Mode;

/// In-memory map of user id to active mode.
///
/// Clones share the same map. Every operation touches a single key, so no lock is
/// held beyond the call itself. Contents live for the process lifetime only.
#[derive(Clone, Default)]
pub struct ModeStore {
    modes: Arc<DashMap<u64, Mode>>,
}

impl ModeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active mode for a user, [`Mode::Analyze`] when never set
    pub fn get(&self, user_id: u64) -> Mode {
        self.modes
            .get(&user_id)
            .map(|entry| *entry)
            .unwrap_or_default()
    }

    pub fn set(&self, user_id: u64, mode: Mode) {
        self.modes.insert(user_id, mode);
    }

    /// Number of users with an explicit mode
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_user_gets_default() {
        let store = ModeStore::new();
        assert_eq!(store.get(42), Mode::Analyze);
        assert_eq!(store.get(u64::MAX), Mode::Analyze);
        // Reading does not create an entry
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let store = ModeStore::new();
        store.set(1, Mode::Review);
        assert_eq!(store.get(1), Mode::Review);
        store.set(1, Mode::Faq);
        assert_eq!(store.get(1), Mode::Faq);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_users_are_independent() {
        let store = ModeStore::new();
        store.set(1, Mode::Faq);
        store.set(2, Mode::Review);
        assert_eq!(store.get(1), Mode::Faq);
        assert_eq!(store.get(2), Mode::Review);
        assert_eq!(store.get(3), Mode::Analyze);
    }

    #[test]
    fn test_clones_share_state() {
        let store = ModeStore::new();
        let other = store.clone();
        other.set(7, Mode::Review);
        assert_eq!(store.get(7), Mode::Review);
    }

    #[test]
    fn test_concurrent_writers() {
        let store = ModeStore::new();
        let handles: Vec<_> = (0..8u64)
            .map(|user| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for i in 0..100 {
                        store.set(user, Mode::ALL[i % 3]);
                    }
                    store.set(user, Mode::Faq);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.len(), 8);
        for user in 0..8u64 {
            assert_eq!(store.get(user), Mode::Faq);
        }
    }
}
