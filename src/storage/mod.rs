//! Key-value blob storage backing the account and task repositories.
//!
//! Each key holds one JSON document: the `users` key holds every account
//! and a `tasks_{user_id}` key holds the tasks of one user. Adapters:
//!
//! - [`InMemoryBlobStore`] for tests and ephemeral sessions
//! - [`DirectoryBlobStore`] persisting one `<key>.json` file per key

mod directory;
mod memory;

pub use directory::DirectoryBlobStore;
pub use memory::InMemoryBlobStore;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Result type for blob storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage contract for string blobs addressed by key.
///
/// Implementations must be safe to share across threads. Callers performing
/// read-modify-write cycles are responsible for serializing them.
pub trait BlobStore: Send + Sync {
    /// Returns the blob stored under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the key is invalid or the backing store
    /// cannot be read.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous blob.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the key is invalid or the backing store
    /// cannot be written.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Errors returned by blob storage adapters.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key contains characters the adapter cannot address.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// The backing store failed.
    #[error("storage I/O failed for key '{key}': {source}")]
    Io {
        /// Key being accessed.
        key: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The stored blob is not a valid record set.
    #[error("malformed record set under key '{key}': {source}")]
    Malformed {
        /// Key being decoded.
        key: String,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// A record set could not be encoded.
    #[error("failed to encode record set for key '{key}': {source}")]
    Encode {
        /// Key being encoded.
        key: String,
        /// Underlying encoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// A lock guarding the store was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Returns `true` when `key` only uses characters safe for every adapter.
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
}

/// Reads the JSON array stored under `key`, treating a missing key as empty.
///
/// # Errors
///
/// Returns [`StorageError`] when the blob cannot be read or decoded.
pub fn read_records<T, S>(store: &S, key: &str) -> StorageResult<Vec<T>>
where
    T: DeserializeOwned,
    S: BlobStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };
    serde_json::from_str(&raw).map_err(|source| StorageError::Malformed {
        key: key.to_owned(),
        source,
    })
}

/// Writes `records` as a JSON array under `key`.
///
/// # Errors
///
/// Returns [`StorageError`] when the records cannot be encoded or stored.
pub fn write_records<T, S>(store: &S, key: &str, records: &[T]) -> StorageResult<()>
where
    T: Serialize,
    S: BlobStore + ?Sized,
{
    let encoded = serde_json::to_string(records).map_err(|source| StorageError::Encode {
        key: key.to_owned(),
        source,
    })?;
    store.set(key, &encoded)?;
    tracing::debug!(key, records = records.len(), "record set written");
    Ok(())
}
