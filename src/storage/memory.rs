//! In-memory blob store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{BlobStore, StorageError, StorageResult, is_valid_key};

/// Thread-safe in-memory blob store.
///
/// Clones share the same underlying map, so a clone handed to one repository
/// observes writes made through another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlobStore {
    blobs: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryBlobStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blobs.read().map_or(0, |blobs| blobs.len())
    }

    /// Returns `true` if no keys are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn checked_key(key: &str) -> StorageResult<()> {
    if is_valid_key(key) {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_owned()))
    }
}

impl BlobStore for InMemoryBlobStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        checked_key(key)?;
        let blobs = self.blobs.read().map_err(|_| StorageError::Poisoned)?;
        Ok(blobs.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        checked_key(key)?;
        let mut blobs = self.blobs.write().map_err(|_| StorageError::Poisoned)?;
        blobs.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
