//! Key/value storage backends.
//!
//! `StorageBackend` is the injected capability the config store writes
//! through. Backends may fail on any call; the store converts those failures
//! into absent/false results.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::types::errors::StorageError;

/// Trait defining the key/value capability.
pub trait StorageBackend {
    /// Returns the stored value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory backend. State lives for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Backend that keeps each key as a JSON file under a directory.
///
/// The directory is created on first write if missing.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StorageError::ReadFailed(format!("Failed to read {}: {}", key, e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            StorageError::Unavailable(format!("Failed to create storage directory: {}", e))
        })?;
        fs::write(self.key_path(key), value)
            .map_err(|e| StorageError::WriteFailed(format!("Failed to write {}: {}", key, e)))
    }
}
