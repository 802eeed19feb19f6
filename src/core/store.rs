//! Key-value persistence collaborator.
//!
//! The engines never reach for ambient storage; the single consumer (the
//! number-range game's best score) receives a store implementation through
//! its constructor. Reads and writes are read-then-write without any
//! transactional guarantee, which is sufficient for a single active player.

use rustc_hash::FxHashMap;

/// Minimal string key-value store.
pub trait ScoreStore {
    /// Read a value, `None` when the key has never been written.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: String);
}

/// In-memory store scoped to the current session.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("best"), None);

        store.set("best", "300".to_string());
        assert_eq!(store.get("best"), Some("300".to_string()));

        store.set("best", "100".to_string());
        assert_eq!(store.get("best"), Some("100".to_string()));
    }
}
