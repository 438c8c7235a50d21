// cart_store/src/services/memory.rs

use super::CartStorage;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory `CartStorage`. Contents live as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryStorage {
  entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  /// Pre-populates a key, e.g. with a snapshot from an earlier session.
  pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
    let storage = Self::new();
    storage.entries.write().insert(key.into(), value.into());
    storage
  }

  /// Reads a key without going through the async trait.
  pub fn get(&self, key: &str) -> Option<String> {
    self.entries.read().get(key).cloned()
  }
}

#[async_trait]
impl CartStorage for MemoryStorage {
  async fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
    Ok(self.get(key))
  }

  async fn save(&self, key: &str, value: String) -> anyhow::Result<()> {
    self.entries.write().insert(key.to_string(), value);
    Ok(())
  }
}
