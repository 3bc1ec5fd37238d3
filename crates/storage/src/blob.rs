//! Key-value blob stores.
//!
//! The tracker keeps its whole state as one string under one key, mirroring
//! browser local storage. [`FileBlobStore`] maps each key to a JSON file in a
//! directory; [`MemoryBlobStore`] keeps blobs in memory.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Flat string storage addressed by key.
pub trait BlobStore {
    /// Read the blob stored under `key`, `None` when nothing was written yet.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace whatever is stored under `key`.
    fn write(&self, key: &str, contents: &str) -> Result<(), StorageError>;
}

impl<S: BlobStore + ?Sized> BlobStore for &S {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), StorageError> {
        (**self).write(key, contents)
    }
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(path.display().to_string(), e)),
        }
    }

    /// Writes to a sibling temp file and renames it over the target, so a
    /// reader never sees a half-written blob.
    fn write(&self, key: &str, contents: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| StorageError::io(self.dir.display().to_string(), e))?;
        let path = self.path_for(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, contents).map_err(|e| StorageError::io(tmp.display().to_string(), e))?;
        fs::rename(&tmp, &path).map_err(|e| StorageError::io(path.display().to_string(), e))
    }
}

/// In-memory store, mainly for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RefCell<HashMap<String, String>>,
}

impl MemoryBlobStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one blob.
    #[must_use]
    pub fn with_blob(key: &str, contents: impl Into<String>) -> Self {
        let store = Self::new();
        store.blobs.borrow_mut().insert(key.to_owned(), contents.into());
        store
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), StorageError> {
        self.blobs.borrow_mut().insert(key.to_owned(), contents.to_owned());
        Ok(())
    }
}
