//! In-process score store.

use rustc_hash::FxHashMap;

use super::{ScoreStore, StoreError};

/// Score store backed by a hash map. Lives as long as the process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: FxHashMap<String, i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with one value already stored.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: i64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Number of keys written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("score"), None);

        store.set("score", 5).unwrap();
        store.set("score", 7).unwrap();
        assert_eq!(store.get("score"), Some(7));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_with_value() {
        let store = MemoryStore::new().with_value("simonHighScore", 3);
        assert_eq!(store.get("simonHighScore"), Some(3));
        assert!(!store.is_empty());
    }
}
