//! Null cache provider
//!
//! A cache provider implementation that doesn't store anything.
//! Selected when caching is disabled in configuration.

use async_trait::async_trait;
use dcache_domain::constants::NULL_PROVIDER_NAME;
use dcache_domain::error::Result;
use dcache_domain::ports::providers::CacheProvider;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Null cache provider that doesn't store anything
///
/// Every read misses, every write is accepted and dropped, every delete
/// reports that nothing was removed.
///
/// # Example
///
/// ```rust
/// use dcache_providers::cache::NullCacheProvider;
///
/// let provider = NullCacheProvider::new();
/// // All operations succeed but nothing is cached
/// ```
#[derive(Debug, Clone, Default)]
pub struct NullCacheProvider;

impl NullCacheProvider {
    /// Create a new null cache provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheProvider for NullCacheProvider {
    async fn get_json(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set_json(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn delete_all(&self, _pattern: &str) -> Result<u64> {
        Ok(0)
    }

    async fn exists(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn get_keys(&self, _pattern: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn get_length(&self, _collection_key: &str) -> Result<u64> {
        Ok(0)
    }

    async fn set_row_json(
        &self,
        _collection_key: &str,
        _entry_key: &str,
        _value: &str,
    ) -> Result<bool> {
        // Accepted, not stored
        Ok(true)
    }

    async fn set_rows_json(
        &self,
        _collection_key: &str,
        _entries: &HashMap<String, String>,
    ) -> Result<()> {
        Ok(())
    }

    async fn read_row_json(&self, _collection_key: &str, _entry_key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn read_rows_json(
        &self,
        _collection_key: &str,
        _entry_keys: &[String],
    ) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn read_all_rows_json(&self, _collection_key: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn exists_row(&self, _collection_key: &str, _entry_key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn delete_row(&self, _collection_key: &str, _entry_key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn delete_rows(
        &self,
        _collection_key: &str,
        _entry_keys: &HashSet<String>,
    ) -> Result<u64> {
        Ok(0)
    }

    async fn delete_row_set(
        &self,
        _collection_key: &str,
        _entry_keys: &HashSet<String>,
    ) -> Result<bool> {
        Ok(false)
    }

    async fn ping(&self) -> Result<Duration> {
        // No backend to reach
        Ok(Duration::ZERO)
    }

    fn provider_name(&self) -> &str {
        NULL_PROVIDER_NAME
    }
}
