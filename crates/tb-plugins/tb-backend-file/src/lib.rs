//! # tb-backend-file
//!
//! Local filesystem implementation of `KeyValueBackend`: one JSON file
//! per collection key under a root directory. This is the seat the
//! browser's local storage vacated: small payloads, rewritten whole.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tb_core::error::{Result, StoreError};
use tb_core::traits::KeyValueBackend;
use tracing::debug;

pub struct FileBackend {
    /// Root directory for all collection files (e.g., "./data")
    root: PathBuf,
}

impl FileBackend {
    /// Opens the backend, creating the root directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .map_err(|err| StoreError::StorageUnavailable(err.to_string()))?;
        debug!(root = %root.display(), "file backend ready");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a storage key to "<key>.json", squashing anything that is
    /// not a safe filename character so a key can never escape the
    /// root directory.
    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        self.root.join(format!("{safe}.json"))
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::StorageUnavailable(err.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)
            .map_err(|err| StoreError::StorageUnavailable(err.to_string()))
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::StorageUnavailable(err.to_string())),
        }
    }
}
