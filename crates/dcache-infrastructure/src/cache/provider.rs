//! Typed distributed cache facade
//!
//! Wraps any [`CacheProvider`] and exposes the cache contract over typed
//! values: `T: Serialize` on the way in, `T: DeserializeOwned` on the way out,
//! JSON text in between (see [`codec`](super::codec)).
//!
//! Any backend fits behind the `Arc<dyn CacheProvider>` it holds.

use super::codec;
use dcache_domain::constants::NAMESPACE_SEPARATOR;
use dcache_domain::error::Result;
use dcache_domain::ports::providers::CacheProvider;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Typed cache over a shared provider
///
/// # Example
///
/// ```ignore
/// use dcache_infrastructure::cache::DistributedCache;
/// use dcache_providers::cache::InMemoryCacheProvider;
///
/// let cache = DistributedCache::new(InMemoryCacheProvider::new());
/// cache.set_row("countries", "fr", &country).await?;
/// let country: Option<Country> = cache.read_row("countries", "fr").await?;
/// ```
#[derive(Clone)]
pub struct DistributedCache {
    provider: Arc<dyn CacheProvider>,
    namespace: Option<String>,
}

// Construction and Configuration Methods
impl DistributedCache {
    /// Create a typed cache over a provider
    pub fn new<P: CacheProvider + 'static>(provider: P) -> Self {
        Self::from_arc(Arc::new(provider))
    }

    /// Create a typed cache over a shared provider
    pub fn from_arc(provider: Arc<dyn CacheProvider>) -> Self {
        Self {
            provider,
            namespace: None,
        }
    }

    /// Prefix every key with `namespace:`; an empty namespace disables prefixing
    pub fn with_namespace<S: Into<String>>(mut self, namespace: S) -> Self {
        let namespace = namespace.into();
        self.namespace = (!namespace.is_empty()).then_some(namespace);
        self
    }

    /// A view of the same provider under another namespace
    pub fn namespaced<S: Into<String>>(&self, namespace: S) -> Self {
        self.clone().with_namespace(namespace)
    }

    /// Current namespace
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Get the underlying cache provider
    pub fn as_provider(&self) -> Arc<dyn CacheProvider> {
        Arc::clone(&self.provider)
    }

    /// Name of the underlying provider
    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    fn namespaced_key(&self, key: &str) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}{NAMESPACE_SEPARATOR}{key}"),
            None => key.to_string(),
        }
    }

    fn strip_namespace(&self, key: String) -> String {
        match &self.namespace {
            Some(ns) => key
                .strip_prefix(ns.as_str())
                .and_then(|rest| rest.strip_prefix(NAMESPACE_SEPARATOR))
                .map_or_else(|| key.clone(), str::to_string),
            None => key,
        }
    }
}

// Scalar Operations Methods
impl DistributedCache {
    /// Get a typed value, `None` when absent or not decodable as `T`
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let key = self.namespaced_key(key);
        Ok(self
            .provider
            .get_json(&key)
            .await?
            .and_then(|json| codec::decode(&key, &json)))
    }

    /// Store a typed value, replacing whatever `key` held
    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = codec::encode(value)?;
        self.provider.set_json(&self.namespaced_key(key), &json).await
    }

    /// Delete a key; true if something was removed
    pub async fn delete(&self, key: &str) -> Result<bool> {
        self.provider.delete(&self.namespaced_key(key)).await
    }

    /// Delete every key starting with `pattern`
    pub async fn delete_all(&self, pattern: &str) -> Result<u64> {
        self.provider.delete_all(&self.namespaced_key(pattern)).await
    }

    /// Check if a key exists
    pub async fn exists(&self, key: &str) -> Result<bool> {
        self.provider.exists(&self.namespaced_key(key)).await
    }

    /// Keys starting with `pattern`, namespace removed
    pub async fn get_keys(&self, pattern: &str) -> Result<Vec<String>> {
        let keys = self
            .provider
            .get_keys(&self.namespaced_key(pattern))
            .await?;
        Ok(keys
            .into_iter()
            .map(|key| self.strip_namespace(key))
            .collect())
    }

    /// 0 when absent, 1 for a scalar, the row count for a collection
    pub async fn get_length(&self, collection_key: &str) -> Result<u64> {
        self.provider
            .get_length(&self.namespaced_key(collection_key))
            .await
    }
}

// Collection Operations Methods
impl DistributedCache {
    /// Insert or overwrite one row
    pub async fn set_row<T: Serialize + ?Sized>(
        &self,
        collection_key: &str,
        entry_key: &str,
        value: &T,
    ) -> Result<bool> {
        let json = codec::encode(value)?;
        self.provider
            .set_row_json(&self.namespaced_key(collection_key), entry_key, &json)
            .await
    }

    /// Insert or overwrite several rows, keeping rows under other entry keys
    pub async fn set_rows<T: Serialize>(
        &self,
        collection_key: &str,
        entries: &HashMap<String, T>,
    ) -> Result<()> {
        let encoded = entries
            .iter()
            .map(|(entry_key, value)| Ok((entry_key.clone(), codec::encode(value)?)))
            .collect::<Result<HashMap<_, _>>>()?;
        self.provider
            .set_rows_json(&self.namespaced_key(collection_key), &encoded)
            .await
    }

    /// Read one row, `None` when absent or not decodable as `T`
    pub async fn read_row<T: DeserializeOwned>(
        &self,
        collection_key: &str,
        entry_key: &str,
    ) -> Result<Option<T>> {
        let key = self.namespaced_key(collection_key);
        Ok(self
            .provider
            .read_row_json(&key, entry_key)
            .await?
            .and_then(|json| codec::decode(&key, &json)))
    }

    /// Read the rows stored under `entry_keys`; missing rows are skipped
    pub async fn read_rows<T, I>(&self, collection_key: &str, entry_keys: I) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let key = self.namespaced_key(collection_key);
        let entry_keys: Vec<String> = entry_keys.into_iter().map(Into::into).collect();
        let rows = self.provider.read_rows_json(&key, &entry_keys).await?;
        Ok(rows
            .iter()
            .filter_map(|json| codec::decode(&key, json))
            .collect())
    }

    /// Read every row of a collection
    pub async fn read_all_rows<T: DeserializeOwned>(&self, collection_key: &str) -> Result<Vec<T>> {
        let key = self.namespaced_key(collection_key);
        let rows = self.provider.read_all_rows_json(&key).await?;
        Ok(rows
            .iter()
            .filter_map(|json| codec::decode(&key, json))
            .collect())
    }

    /// Check if `entry_key` is present within the collection
    pub async fn exists_row(&self, collection_key: &str, entry_key: &str) -> Result<bool> {
        self.provider
            .exists_row(&self.namespaced_key(collection_key), entry_key)
            .await
    }

    /// Delete one row; the collection disappears with its last row
    pub async fn delete_row(&self, collection_key: &str, entry_key: &str) -> Result<bool> {
        self.provider
            .delete_row(&self.namespaced_key(collection_key), entry_key)
            .await
    }

    /// Delete several rows one by one; returns how many were removed
    pub async fn delete_rows(
        &self,
        collection_key: &str,
        entry_keys: &HashSet<String>,
    ) -> Result<u64> {
        self.provider
            .delete_rows(&self.namespaced_key(collection_key), entry_keys)
            .await
    }

    /// Delete several rows with one backend command, where supported
    pub async fn delete_row_set(
        &self,
        collection_key: &str,
        entry_keys: &HashSet<String>,
    ) -> Result<bool> {
        self.provider
            .delete_row_set(&self.namespaced_key(collection_key), entry_keys)
            .await
    }

    /// Rebuild a collection from freshly produced items
    ///
    /// Runs `producer`, deletes the collection, then writes every item under
    /// `id_of(item)`. Items sharing an id collapse to the last one. Readers
    /// may see the collection absent between the delete and the write.
    pub async fn refresh<T, F, Fut, I>(&self, collection_key: &str, producer: F, id_of: I) -> Result<()>
    where
        T: Serialize,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
        I: Fn(&T) -> String,
    {
        let items = producer().await?;
        let encoded = items
            .iter()
            .map(|item| Ok((id_of(item), codec::encode(item)?)))
            .collect::<Result<HashMap<_, _>>>()?;

        let key = self.namespaced_key(collection_key);
        self.provider.delete(&key).await?;
        self.provider.set_rows_json(&key, &encoded).await?;
        debug!(collection_key = %key, rows = encoded.len(), "Refreshed collection");
        Ok(())
    }
}

// Health Methods
impl DistributedCache {
    /// Round-trip latency to the backend
    pub async fn ping(&self) -> Result<Duration> {
        self.provider.ping().await
    }
}

impl fmt::Debug for DistributedCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistributedCache")
            .field("provider", &self.provider)
            .field("namespace", &self.namespace)
            .finish()
    }
}
