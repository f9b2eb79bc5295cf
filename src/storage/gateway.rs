//! Persistence gateway
//!
//! A minimal key-value contract: `get` returns the bytes stored under a
//! key (or nothing), `set` replaces them. The gateway has no knowledge of
//! budgets; encoding lives in [`super::snapshot`].

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BudgetError, BudgetResult};

use super::file_io::write_bytes_atomic;

/// Durable key-value storage
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if absent
    fn get(&self, key: &str) -> BudgetResult<Option<Vec<u8>>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &[u8]) -> BudgetResult<()>;
}

/// Stores each key as one file inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`; characters outside `[A-Za-z0-9_-]` become `_`
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", name))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> BudgetResult<Option<Vec<u8>>> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BudgetError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> BudgetResult<()> {
        write_bytes_atomic(self.path_for(key), value)
    }
}

/// Volatile store for tests and ephemeral sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every `set` fails, for exercising error paths
    pub fn failing() -> Self {
        Self {
            entries: HashMap::new(),
            fail_writes: true,
        }
    }

    /// Seed a raw value, bypassing `set`
    pub fn with_entry(mut self, key: &str, value: impl Into<Vec<u8>>) -> Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> BudgetResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> BudgetResult<()> {
        if self.fail_writes {
            return Err(BudgetError::Storage(format!(
                "Write to '{}' rejected",
                key
            )));
        }
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        assert_eq!(store.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_file_store_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("data"));

        store.set("budget_data", b"{}").unwrap();
        assert_eq!(store.get("budget_data").unwrap(), Some(b"{}".to_vec()));

        store.set("budget_data", b"[]").unwrap();
        assert_eq!(store.get("budget_data").unwrap(), Some(b"[]".to_vec()));
    }

    #[test]
    fn test_file_store_sanitizes_keys() {
        let store = FileStore::new("/tmp/x");
        assert_eq!(
            store.path_for("@budget/data"),
            PathBuf::from("/tmp/x/_budget_data.json")
        );
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", b"v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some(b"v".to_vec()));
    }

    #[test]
    fn test_failing_memory_store() {
        let mut store = MemoryStore::failing();
        assert!(matches!(store.set("k", b"v"), Err(BudgetError::Storage(_))));
        assert_eq!(store.get("k").unwrap(), None);
    }
}
