//! In-memory cache provider
//!
//! Dictionary-backed stand-in for the Redis provider, used to run cache
//! consumers deterministically without a network.
//!
//! Scalars are kept as their encoded JSON text, so a typed read goes through
//! the same decoding path as in production. Collections are kept as live
//! nested maps and never encoded as a whole.
//!
//! ## Example
//!
//! ```ignore
//! use dcache_providers::cache::InMemoryCacheProvider;
//!
//! let provider = InMemoryCacheProvider::new();
//! provider.set_row_json("users", "42", "\"Ada\"").await?;
//! assert_eq!(provider.get_length("users").await?, 1);
//! ```

use crate::constants::MEMORY_PING_FLOOR_MICROS;
use async_trait::async_trait;
use dcache_domain::constants::MEMORY_PROVIDER_NAME;
use dcache_domain::error::{Error, Result};
use dcache_domain::ports::providers::CacheProvider;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};
use tracing::debug;

/// Value stored under one key of the in-memory provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheValue {
    /// Encoded scalar value
    Scalar(String),
    /// Collection rows keyed by entry key
    Collection(BTreeMap<String, String>),
}

impl CacheValue {
    /// Length as reported by `get_length`
    pub fn len(&self) -> u64 {
        match self {
            Self::Scalar(_) => 1,
            Self::Collection(rows) => rows.len() as u64,
        }
    }

    /// Whether this is a collection without rows
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Collection(rows) if rows.is_empty())
    }
}

/// In-memory cache provider
///
/// Each instance owns its own store; nothing is shared between instances.
/// Keys and rows are enumerated in sorted order.
#[derive(Default)]
pub struct InMemoryCacheProvider {
    store: RwLock<BTreeMap<String, CacheValue>>,
}

impl InMemoryCacheProvider {
    /// Create an empty in-memory cache provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    ///
    /// Inspection helper: a poisoned lock reads as an empty store here, while
    /// every `CacheProvider` method reports it as `Error::Internal`.
    pub fn len(&self) -> usize {
        self.read().map(|store| store.len()).unwrap_or_default()
    }

    /// Whether the store holds no key at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the value stored under `key`
    ///
    /// `None` when the key is absent or the lock is poisoned.
    pub fn value(&self, key: &str) -> Option<CacheValue> {
        self.read().ok().and_then(|store| store.get(key).cloned())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, CacheValue>>> {
        self.store
            .read()
            .map_err(|_| Error::internal("In-memory cache lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<String, CacheValue>>> {
        self.store
            .write()
            .map_err(|_| Error::internal("In-memory cache lock poisoned"))
    }

    /// Rows of the collection at `collection_key`, `None` when absent
    fn with_rows<R>(
        &self,
        collection_key: &str,
        f: impl FnOnce(&BTreeMap<String, String>) -> R,
    ) -> Result<Option<R>> {
        let store = self.read()?;
        match store.get(collection_key) {
            None => Ok(None),
            Some(CacheValue::Collection(rows)) => Ok(Some(f(rows))),
            Some(CacheValue::Scalar(_)) => Err(Error::wrong_type(collection_key)),
        }
    }

    /// Mutate the rows of an existing collection, dropping the key once it is empty
    fn remove_rows<'a>(
        &self,
        collection_key: &str,
        entry_keys: impl IntoIterator<Item = &'a str>,
    ) -> Result<u64> {
        let mut store = self.write()?;
        let removed = match store.get_mut(collection_key) {
            None => return Ok(0),
            Some(CacheValue::Scalar(_)) => return Err(Error::wrong_type(collection_key)),
            Some(CacheValue::Collection(rows)) => entry_keys
                .into_iter()
                .filter(|entry_key| rows.remove(*entry_key).is_some())
                .count() as u64,
        };

        if store.get(collection_key).is_some_and(CacheValue::is_empty) {
            store.remove(collection_key);
            debug!(collection_key, "Removed empty collection");
        }
        Ok(removed)
    }

    /// Collection rows at `collection_key`, created when absent
    fn rows_mut<'s>(
        store: &'s mut BTreeMap<String, CacheValue>,
        collection_key: &str,
    ) -> Result<&'s mut BTreeMap<String, String>> {
        let value = store
            .entry(collection_key.to_string())
            .or_insert_with(|| CacheValue::Collection(BTreeMap::new()));
        match value {
            CacheValue::Collection(rows) => Ok(rows),
            CacheValue::Scalar(_) => Err(Error::wrong_type(collection_key)),
        }
    }
}

#[async_trait]
impl CacheProvider for InMemoryCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        let store = self.read()?;
        Ok(match store.get(key) {
            Some(CacheValue::Scalar(json)) => Some(json.clone()),
            Some(CacheValue::Collection(_)) | None => None,
        })
    }

    async fn set_json(&self, key: &str, value: &str) -> Result<()> {
        self.write()?
            .insert(key.to_string(), CacheValue::Scalar(value.to_string()));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.write()?.remove(key).is_some())
    }

    async fn delete_all(&self, pattern: &str) -> Result<u64> {
        let keys = self.get_keys(pattern).await?;
        let mut removed = 0;
        for key in &keys {
            if self.delete(key).await? {
                removed += 1;
            }
        }
        debug!(pattern, removed, "Deleted keys by prefix");
        Ok(removed)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.read()?.contains_key(key))
    }

    async fn get_keys(&self, pattern: &str) -> Result<Vec<String>> {
        let store = self.read()?;
        Ok(store
            .range(pattern.to_string()..)
            .map(|(key, _)| key)
            .take_while(|key| key.starts_with(pattern))
            .cloned()
            .collect())
    }

    async fn get_length(&self, collection_key: &str) -> Result<u64> {
        Ok(self
            .read()?
            .get(collection_key)
            .map_or(0, CacheValue::len))
    }

    async fn set_row_json(
        &self,
        collection_key: &str,
        entry_key: &str,
        value: &str,
    ) -> Result<bool> {
        let mut store = self.write()?;
        Self::rows_mut(&mut store, collection_key)?
            .insert(entry_key.to_string(), value.to_string());
        Ok(true)
    }

    async fn set_rows_json(
        &self,
        collection_key: &str,
        entries: &HashMap<String, String>,
    ) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        let mut store = self.write()?;
        let rows = Self::rows_mut(&mut store, collection_key)?;
        rows.extend(
            entries
                .iter()
                .map(|(entry_key, value)| (entry_key.clone(), value.clone())),
        );
        Ok(())
    }

    async fn read_row_json(&self, collection_key: &str, entry_key: &str) -> Result<Option<String>> {
        Ok(self
            .with_rows(collection_key, |rows| rows.get(entry_key).cloned())?
            .flatten())
    }

    async fn read_rows_json(
        &self,
        collection_key: &str,
        entry_keys: &[String],
    ) -> Result<Vec<String>> {
        Ok(self
            .with_rows(collection_key, |rows| {
                entry_keys
                    .iter()
                    .filter_map(|entry_key| rows.get(entry_key).cloned())
                    .collect()
            })?
            .unwrap_or_default())
    }

    async fn read_all_rows_json(&self, collection_key: &str) -> Result<Vec<String>> {
        Ok(self
            .with_rows(collection_key, |rows| rows.values().cloned().collect())?
            .unwrap_or_default())
    }

    async fn exists_row(&self, collection_key: &str, entry_key: &str) -> Result<bool> {
        Ok(self
            .with_rows(collection_key, |rows| rows.contains_key(entry_key))?
            .unwrap_or(false))
    }

    async fn delete_row(&self, collection_key: &str, entry_key: &str) -> Result<bool> {
        Ok(self.remove_rows(collection_key, [entry_key])? > 0)
    }

    async fn delete_rows(
        &self,
        collection_key: &str,
        entry_keys: &HashSet<String>,
    ) -> Result<u64> {
        self.remove_rows(collection_key, entry_keys.iter().map(String::as_str))
    }

    async fn delete_row_set(
        &self,
        _collection_key: &str,
        _entry_keys: &HashSet<String>,
    ) -> Result<bool> {
        Err(Error::not_implemented("delete_row_set", MEMORY_PROVIDER_NAME))
    }

    async fn ping(&self) -> Result<Duration> {
        let started = Instant::now();
        drop(self.read()?);
        // Clock resolution can report a zero elapsed time.
        Ok(started
            .elapsed()
            .max(Duration::from_micros(MEMORY_PING_FLOOR_MICROS)))
    }

    fn provider_name(&self) -> &str {
        MEMORY_PROVIDER_NAME
    }
}

impl std::fmt::Debug for InMemoryCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCacheProvider")
            .field("keys", &self.len())
            .finish()
    }
}
