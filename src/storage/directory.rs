//! Directory-backed blob store using capability-scoped filesystem access.
//!
//! Each key maps to `<key>.json` inside a single directory opened once at
//! construction. Writes go to a sibling temporary file which is then renamed
//! over the target, so readers never observe a partially written blob.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

use super::{BlobStore, StorageError, StorageResult, is_valid_key};

/// Blob store persisting each key as a JSON file in one directory.
#[derive(Debug)]
pub struct DirectoryBlobStore {
    dir: Dir,
}

impl DirectoryBlobStore {
    /// Wraps an already opened directory capability.
    #[must_use]
    pub const fn new(dir: Dir) -> Self {
        Self { dir }
    }

    /// Opens `path`, creating it and any missing parents first.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the directory cannot be created or
    /// opened.
    pub fn open(path: &Utf8Path) -> StorageResult<Self> {
        let io_error = |source| StorageError::Io {
            key: path.to_string(),
            source,
        };
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(io_error)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(io_error)?;
        tracing::debug!(%path, "opened blob directory");
        Ok(Self::new(dir))
    }

    fn file_name(key: &str) -> StorageResult<String> {
        if is_valid_key(key) {
            Ok(format!("{key}.json"))
        } else {
            Err(StorageError::InvalidKey(key.to_owned()))
        }
    }
}

fn io_failure(key: &str, source: io::Error) -> StorageError {
    StorageError::Io {
        key: key.to_owned(),
        source,
    }
}

impl BlobStore for DirectoryBlobStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let file_name = Self::file_name(key)?;
        match self.dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_failure(key, err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let file_name = Self::file_name(key)?;
        let staging = format!("{file_name}.tmp");
        self.dir
            .write(&staging, value)
            .map_err(|err| io_failure(key, err))?;
        self.dir
            .rename(&staging, &self.dir, &file_name)
            .map_err(|err| io_failure(key, err))
    }
}
