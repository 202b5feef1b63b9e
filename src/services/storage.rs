//! Persistent key-value storage.
//!
//! A small JSON-backed store for values that should survive restarts
//! (settings, progress). Values are arbitrary serde-serialisable types;
//! everything lives in memory between explicit `load`/`save` calls.

use std::path::PathBuf;

use log::info;
use rustc_hash::FxHashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// JSON-file-backed key-value store.
pub struct StorageService {
    path: PathBuf,
    values: FxHashMap<String, Value>,
}

impl StorageService {
    /// Create a store persisting to `path`. Nothing is read until
    /// [`load`](Self::load).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            values: FxHashMap::default(),
        }
    }

    /// Read the backing file, replacing the in-memory values.
    pub fn load(&mut self) -> Result<(), String> {
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read storage file: {}", e))?;
        self.values = serde_json::from_str(&text)
            .map_err(|e| format!("Failed to parse storage file: {}", e))?;
        info!("Loaded {} stored value(s) from {:?}.", self.values.len(), self.path);
        Ok(())
    }

    /// Write the in-memory values to the backing file.
    pub fn save(&self) -> Result<(), String> {
        let text = serde_json::to_string_pretty(&self.values)
            .map_err(|e| format!("Failed to serialise storage: {}", e))?;
        std::fs::write(&self.path, text)
            .map_err(|e| format!("Failed to write storage file: {}", e))?;
        info!("Saved {} stored value(s) to {:?}.", self.values.len(), self.path);
        Ok(())
    }

    /// Store a serialisable value under `key`.
    pub fn set<T: Serialize>(&mut self, key: impl Into<String>, value: &T) -> Result<(), String> {
        let value = serde_json::to_value(value)
            .map_err(|e| format!("Failed to serialise value: {}", e))?;
        self.values.insert(key.into(), value);
        Ok(())
    }

    /// Fetch and deserialise the value under `key`, if present and of the
    /// expected shape.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Remove the value under `key`.
    pub fn remove(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}
