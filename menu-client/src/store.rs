// menu-client/src/store.rs
// Key-value storage for the remembered customer identity

use parking_lot::RwLock;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// File name of the persisted store inside its directory
pub const STORE_FILE_NAME: &str = "customer-store.json";

/// Store error type
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Process-wide keyed state
///
/// Values persist for the store's lifetime (or on disk, depending on the
/// implementation). Session flags always live only as long as the process.
/// Single writer, last write wins.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    /// All keys in ascending order
    fn keys(&self) -> Vec<String>;
    fn has_session_flag(&self, key: &str) -> bool;
    fn set_session_flag(&self, key: &str);
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<BTreeMap<String, String>>,
    session: RwLock<HashSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.values.read().keys().cloned().collect()
    }

    fn has_session_flag(&self, key: &str) -> bool {
        self.session.read().contains(key)
    }

    fn set_session_flag(&self, key: &str) {
        self.session.write().insert(key.to_string());
    }
}

/// JSON-file backed store
///
/// The whole map is rewritten on every `set`. A missing or unreadable file
/// starts an empty store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
    session: RwLock<HashSet<String>>,
}

impl FileStore {
    /// Open the store in `dir`
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let path = dir.into().join(STORE_FILE_NAME);
        let values = Self::load(&path);
        Self {
            path,
            values: RwLock::new(values),
            session: RwLock::new(HashSet::new()),
        }
    }

    fn load(path: &Path) -> BTreeMap<String, String> {
        if !path.exists() {
            return BTreeMap::new();
        }
        let parsed = fs::read_to_string(path)
            .map_err(StoreError::from)
            .and_then(|json| serde_json::from_str(&json).map_err(StoreError::from));
        match parsed {
            Ok(values) => values,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Customer store unreadable, starting empty");
                BTreeMap::new()
            }
        }
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.write();
        let mut next = values.clone();
        next.insert(key.to_string(), value.to_string());
        self.save(&next)?;
        *values = next;
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.values.read().keys().cloned().collect()
    }

    fn has_session_flag(&self, key: &str) -> bool {
        self.session.read().contains(key)
    }

    fn set_session_flag(&self, key: &str) {
        self.session.write().insert(key.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.get("a").is_none());
        store.set("b", "2").unwrap();
        store.set("a", "1").unwrap();
        store.set("a", "3").unwrap();
        assert_eq!(store.get("a").as_deref(), Some("3"));
        assert_eq!(store.keys(), vec!["a", "b"]);

        assert!(!store.has_session_flag("seen"));
        store.set_session_flag("seen");
        assert!(store.has_session_flag("seen"));
    }

    #[test]
    fn test_file_store_persists_values_not_flags() {
        let dir = TempDir::new().unwrap();
        {
            let store = FileStore::open(dir.path());
            store.set("userData_w1", r#"{"name":"Asha"}"#).unwrap();
            store.set_session_flag("greetingShown_w1");
            assert!(store.path().exists());
        }

        let reopened = FileStore::open(dir.path());
        assert_eq!(reopened.get("userData_w1").as_deref(), Some(r#"{"name":"Asha"}"#));
        assert!(!reopened.has_session_flag("greetingShown_w1"));
    }

    #[test]
    fn test_file_store_corrupt_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(STORE_FILE_NAME), "not json").unwrap();
        let store = FileStore::open(dir.path());
        assert!(store.keys().is_empty());
    }

    #[test]
    fn test_file_store_failed_write_keeps_memory_unchanged() {
        let dir = TempDir::new().unwrap();
        // A regular file where the store directory should be
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let store = FileStore::open(&blocker);

        assert!(store.set("userData_w1", "{}").is_err());
        assert!(store.get("userData_w1").is_none());
        assert!(store.keys().is_empty());
    }

    #[test]
    fn test_file_store_creates_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested);
        store.set("k", "v").unwrap();
        assert!(nested.join(STORE_FILE_NAME).exists());
    }
}
