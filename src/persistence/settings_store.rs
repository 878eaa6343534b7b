//! Key/value settings storage
//!
//! The host decides where settings live. The engine only needs to read and
//! write JSON values under string keys and to ask for pending writes to land.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::persistence::error::{corrupted_data, load_error, save_error, PersistenceErrorContext};
use crate::persistence::PersistenceResult;

/// Storage backend for persisted settings
pub trait SettingsStore {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Option<Value>;

    fn set(&mut self, key: &str, value: Value) -> PersistenceResult<()>;

    /// Make every pending write durable
    fn flush(&mut self) -> PersistenceResult<()> {
        Ok(())
    }

    /// Name for logging
    fn store_name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// In-process store, lost when dropped
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> PersistenceResult<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn store_name(&self) -> &str {
        "memory"
    }
}

/// Store backed by a single JSON object on disk
///
/// Writes are buffered until [`SettingsStore::flush`], which replaces the
/// file atomically.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Map<String, Value>,
    dirty: bool,
}

impl JsonFileStore {
    /// Open the store at `path`, starting empty if the file does not exist yet
    pub fn open<P: AsRef<Path>>(path: P) -> PersistenceResult<Self> {
        let path = path.as_ref().to_path_buf();

        let values = if path.exists() {
            let text = fs::read_to_string(&path).map_err(|e| load_error(&path, e))?;
            match serde_json::from_str::<Value>(&text)? {
                Value::Object(map) => map,
                other => {
                    return Err(corrupted_data(format!(
                        "{} holds {} instead of a settings object",
                        path.display(),
                        json_kind(&other)
                    )))
                }
            }
        } else {
            Map::new()
        };

        log::debug!("[JsonFileStore] Opened {} with {} keys", path.display(), values.len());

        Ok(Self {
            path,
            values,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn has_pending_writes(&self) -> bool {
        self.dirty
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> PersistenceResult<()> {
        if self.values.get(key) != Some(&value) {
            self.values.insert(key.to_string(), value);
            self.dirty = true;
        }
        Ok(())
    }

    fn flush(&mut self) -> PersistenceResult<()> {
        if !self.dirty {
            return Ok(());
        }

        let data = serde_json::to_vec_pretty(&self.values)?;
        atomic_write(&self.path, &data)?;
        self.dirty = false;

        log::debug!("[JsonFileStore] Flushed {} keys to {}", self.values.len(), self.path.display());
        Ok(())
    }

    fn store_name(&self) -> &str {
        "json-file"
    }
}

/// Write `data` to a sibling temp file, then rename it over `path`
pub fn atomic_write(path: &Path, data: &[u8]) -> PersistenceResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).persistence_context("creating settings directory")?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, data).map_err(|e| save_error(&temp_path, e))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| save_error(path, e))?;

    Ok(())
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::PersistenceError;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::new();
        store.set("a", json!(1)).unwrap();
        store.set("a", json!(2)).unwrap();
        assert_eq!(store.get("a"), Some(json!(2)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("b"), None);
    }

    #[test]
    fn test_file_store_flush_and_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("settings.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("weather.temperature", json!(4)).unwrap();
        assert!(store.has_pending_writes());
        assert!(!path.exists());

        store.flush().unwrap();
        assert!(!store.has_pending_writes());
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("weather.temperature"), Some(json!(4)));
    }

    #[test]
    fn test_unchanged_value_is_not_dirty() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::open(temp_dir.path().join("s.json")).unwrap();
        store.set("k", json!("v")).unwrap();
        store.flush().unwrap();
        store.set("k", json!("v")).unwrap();
        assert!(!store.has_pending_writes());
    }

    #[test]
    fn test_non_object_file_is_corrupted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        match JsonFileStore::open(&path) {
            Err(PersistenceError::CorruptedData(msg)) => assert!(msg.contains("an array")),
            other => panic!("expected corrupted data, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            JsonFileStore::open(&path),
            Err(PersistenceError::SerializationError(_))
        ));
    }
}
