//! # tb-backend-memory
//!
//! In-process implementation of `KeyValueBackend`. Nothing survives the
//! process; used by tests and by ephemeral demo runs.

use dashmap::DashMap;
use tb_core::error::Result;
use tb_core::traits::KeyValueBackend;

#[derive(Default)]
pub struct MemoryBackend {
    entries: DashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held. Handy in assertions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
