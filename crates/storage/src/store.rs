//! Async item interface over key-value storage
//!
//! Screens never touch sled directly. They go through [`KeyValueStore`],
//! which exposes the three item operations the application needs:
//! read, write and remove a string value by key.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::kv::{KvError, KvStore, Result};

/// String-valued item storage addressed by key
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the item stored under `key`
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous item
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the item stored under `key`; removing a missing key is not an error
    async fn remove_item(&self, key: &str) -> Result<()>;
}

#[async_trait]
impl KeyValueStore for KvStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.get::<String>(key)
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.set(key, &value)
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let existed = self.remove(key)?;
        tracing::debug!(key, existed, "Removed item");
        Ok(())
    }
}

/// Volatile item store backed by a hash map
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory store pre-populated with items
    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: RwLock::new(items.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    fn check_key(key: &str) -> Result<()> {
        if key.trim().is_empty() {
            return Err(KvError::InvalidKey(key.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Self::check_key(key)?;
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        Self::check_key(key)?;
        self.items.write().await.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        Self::check_key(key)?;
        self.items.write().await.remove(key);
        Ok(())
    }
}
