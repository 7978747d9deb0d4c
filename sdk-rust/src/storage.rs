use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::Mutex,
};

use thiserror::Error;

/// Storage key the session token is persisted under.
pub const TOKEN_KEY: &str = "newsphere.token";
/// Storage key the serialized user is persisted under.
pub const USER_KEY: &str = "newsphere.user";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Durable key-value storage for client state.
///
/// The session store is the only writer; reads happen at startup and inside
/// store operations, so implementations need interior mutability but no
/// cross-process coordination.
pub trait ClientStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// In-memory storage, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClientStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().expect("storage poisoned").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .expect("storage poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.lock().expect("storage poisoned").remove(key);
    }
}

/// File-backed storage: a single JSON object rewritten on every mutation.
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open the storage file at `path`, creating parent directories as
    /// needed. A missing file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let entries = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Open the storage file at its default location under the platform
    /// data directory.
    pub fn open_default() -> Result<Self, StorageError> {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("newsphere");
        Self::open(dir.join("session.json"))
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl ClientStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().expect("storage poisoned").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("storage poisoned");
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().expect("storage poisoned");
        if entries.remove(key).is_some() {
            if let Err(error) = self.flush(&entries) {
                tracing::warn!(%error, key, "failed to persist storage after removal");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get(TOKEN_KEY), None);

        storage.set(TOKEN_KEY, "tok").expect("set should succeed");
        assert_eq!(storage.get(TOKEN_KEY), Some("tok".to_string()));

        storage.remove(TOKEN_KEY);
        assert_eq!(storage.get(TOKEN_KEY), None);
    }

    #[test]
    fn file_storage_persists_across_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        let storage = FileStorage::open(&path).expect("open");
        storage.set(TOKEN_KEY, "tok").expect("set token");
        storage.set(USER_KEY, r#"{"id":"u1"}"#).expect("set user");
        drop(storage);

        let reopened = FileStorage::open(&path).expect("reopen");
        assert_eq!(reopened.get(TOKEN_KEY), Some("tok".to_string()));
        assert_eq!(reopened.get(USER_KEY), Some(r#"{"id":"u1"}"#.to_string()));

        reopened.remove(TOKEN_KEY);
        let reopened_again = FileStorage::open(&path).expect("reopen again");
        assert_eq!(reopened_again.get(TOKEN_KEY), None);
        assert_eq!(reopened_again.get(USER_KEY), Some(r#"{"id":"u1"}"#.to_string()));
    }

    #[test]
    fn file_storage_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("deep").join("session.json");

        let storage = FileStorage::open(&path).expect("open");
        storage.set(TOKEN_KEY, "tok").expect("set");
        assert!(path.exists());
    }
}
