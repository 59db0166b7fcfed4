//! Durable key-value byte store
//!
//! The engine persists everything through this boundary: a serialized record
//! array under one well-known key, the theme preference under another. The
//! file backend writes atomically so a crash mid-write never corrupts data.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};

/// Abstraction over the durable store the ledger persists into
pub trait KeyValueStore {
    /// Read the bytes stored under `key`, if any
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>>;

    /// Durably store `value` under `key`, replacing any previous value
    fn put(&mut self, key: &str, value: &[u8]) -> LedgerResult<()>;
}

/// File-backed store: one file per key under a data directory
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store writes into
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        fs::read(&path).map(Some).map_err(|e| {
            LedgerError::Persistence(format!("Failed to read {}: {}", path.display(), e))
        })
    }

    fn put(&mut self, key: &str, value: &[u8]) -> LedgerResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            LedgerError::Persistence(format!(
                "Failed to create directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.key_path(key);

        // Write to a temp file in the same directory, then rename into place.
        // The value is either completely written or not replaced at all.
        let temp_path = self.dir.join(format!("{}.tmp", key));

        let mut file = File::create(&temp_path)
            .map_err(|e| LedgerError::Persistence(format!("Failed to create temp file: {}", e)))?;

        file.write_all(value)
            .map_err(|e| LedgerError::Persistence(format!("Failed to write data: {}", e)))?;

        file.flush()
            .map_err(|e| LedgerError::Persistence(format!("Failed to flush data: {}", e)))?;

        // Sync to disk before rename
        file.sync_all()
            .map_err(|e| LedgerError::Persistence(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, &path).map_err(|e| {
            // Try to clean up temp file if rename fails
            let _ = fs::remove_file(&temp_path);
            LedgerError::Persistence(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }
}

/// In-memory store for tests and throwaway ledgers
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> LedgerResult<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
