//! High-score persistence.
//!
//! The game only ever needs one integer under one key, so the store is a
//! tiny key-value interface. Reads are forgiving: anything missing or
//! unreadable is simply absent. Writes report failures so the caller can
//! log them.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Failure writing to a score store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("score store encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key-value integer store.
pub trait ScoreStore {
    /// Read the value under `key`, `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<i64>;

    /// Write `value` under `key`. Last write wins.
    fn set(&mut self, key: &str, value: i64) -> Result<(), StoreError>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for &mut S {
    fn get(&self, key: &str) -> Option<i64> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn get(&self, key: &str) -> Option<i64> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Read a high score, treating absent or out-of-range values as 0.
pub fn read_high_score<S: ScoreStore + ?Sized>(store: &S, key: &str) -> u32 {
    match store.get(key) {
        None => 0,
        Some(raw) => u32::try_from(raw).unwrap_or_else(|_| {
            tracing::warn!(key, raw, "ignoring out-of-range high score");
            0
        }),
    }
}
