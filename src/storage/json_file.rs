//! Score store persisted as a JSON object in a file.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde_json::Value;

use super::{ScoreStore, StoreError};

const APP_DIR: &str = "rust-simon";
const FILE_NAME: &str = "scores.json";

/// Score store that keeps `{ "key": integer, ... }` in one JSON file.
///
/// Values written by a browser's key-value storage are strings, so numeric
/// strings are accepted on read. A missing or malformed file reads as empty.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data_dir>/rust-simon/scores.json`.
    pub fn in_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(APP_DIR).join(FILE_NAME))
    }

    /// Store in the per-user data directory, or the working directory when
    /// the platform has none.
    pub fn from_env() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| {
            tracing::warn!("no user data directory, keeping scores in the working directory");
            PathBuf::from(".")
        });
        Self::in_data_dir(base)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> FxHashMap<String, Value> {
        let Ok(bytes) = fs::read(&self.path) else {
            return FxHashMap::default();
        };
        serde_json::from_slice(&bytes).unwrap_or_else(|err| {
            tracing::warn!(path = %self.path.display(), %err, "ignoring malformed score file");
            FxHashMap::default()
        })
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl ScoreStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<i64> {
        let values = self.load();
        let value = values.get(key)?;
        let parsed = as_integer(value);
        if parsed.is_none() {
            tracing::warn!(key, %value, "ignoring non-integer score");
        }
        parsed
    }

    fn set(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        let mut values = self.load();
        values.insert(key.to_string(), Value::from(value));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(&values)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
