//! Storage
//!
//! Key/value text storage for the persisted cart. [`MemoryStorage`] keeps
//! everything in process; [`FileStorage`] keeps one file per key in a directory.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Storage Errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error reading or writing the backing store
    #[error("Storage IO error: {0}")]
    Io(#[from] io::Error),

    /// Key cannot be mapped onto the backing store
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// A text blob store keyed by name.
#[cfg_attr(test, mockall::automock)]
pub trait CartStorage {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: FxHashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory storage holding a single entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = Self::new();

        storage.entries.insert(key.into(), value.into());

        storage
    }

    /// Get the raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Drop the value stored under `key`, as if cleared from outside.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());

        Ok(())
    }
}

/// Directory-backed storage. Each key is stored in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the stored files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidKey`] unless the key is non-empty and
    /// made of ASCII letters, digits, `-`, `_` or `.`, and does not start with `.`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl CartStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");

        fs::create_dir_all(&self.dir)?;

        // Write then rename so readers never observe a half-written document.
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;

        Ok(())
    }
}
