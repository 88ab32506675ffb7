//! Key-value persistence backends.
//!
//! The setup is stored as one serialized blob under a single key. Backends
//! are synchronous and overwrite wholesale; the last write wins.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Errors that can occur while talking to a backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Store lock poisoned")]
    Poisoned,
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Trait that all persistence backends must implement
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value for `key`, `None` when it was never written
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value for `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// In-memory backend, used in tests and for throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw value
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per entry inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) the data directory
    pub fn open(dir: impl AsRef<Path>) -> StorageResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        // Write then rename so a crash never leaves a half-written blob
        let tmp = path.with_extension("json.tmp");
        if let Err(e) = fs::write(&tmp, value).and_then(|_| fs::rename(&tmp, &path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("two".to_string()));
    }

    #[test]
    fn test_file_store_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("imposter-game-setup-v1").unwrap(), None);
    }

    #[test]
    fn test_file_store_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("setup", "{\"a\":1}").unwrap();
        store.set("setup", "{\"a\":2}").unwrap();

        assert_eq!(store.get("setup").unwrap(), Some("{\"a\":2}".to_string()));
        assert!(dir.path().join("setup.json").exists());
        assert!(!dir.path().join("setup.json.tmp").exists());
    }

    #[test]
    fn test_file_store_creates_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();
        store.set("k", "v").unwrap();
        assert_eq!(store.dir(), nested.as_path());
        assert!(nested.join("k.json").exists());
    }

    #[test]
    fn test_file_store_failed_rename_cleans_up_tmp() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        // a directory in the target's place makes the rename fail
        fs::create_dir(dir.path().join("setup.json")).unwrap();
        fs::write(dir.path().join("setup.json").join("keep"), "x").unwrap();

        assert!(matches!(store.set("setup", "{}"), Err(StorageError::Io(_))));
        assert!(!dir.path().join("setup.json.tmp").exists());
    }

    #[test]
    fn test_file_store_rejects_path_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.set("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(store.get(""), Err(StorageError::InvalidKey(_))));
    }
}
