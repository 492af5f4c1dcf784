//! Cache provider factory
//!
//! Builds a [`DistributedCache`] from [`CacheConfig`]. Provider
//! implementations come from the dcache-providers crate.

use crate::cache::provider::DistributedCache;
use crate::config::{CacheBackend, CacheConfig};
use dcache_domain::error::Result;
use dcache_providers::cache::{InMemoryCacheProvider, NullCacheProvider, RedisCacheProvider};
use std::time::Duration;
use tracing::info;

/// Cache provider factory
#[derive(Debug, Clone, Copy)]
pub struct CacheProviderFactory;

impl CacheProviderFactory {
    /// Create a cache from configuration
    ///
    /// A disabled cache is backed by the null provider. The Redis connection
    /// is opened lazily on first use.
    pub fn create_from_config(config: &CacheConfig) -> Result<DistributedCache> {
        let cache = if !config.enabled {
            Self::create_null()
        } else {
            match config.provider {
                CacheBackend::Memory => Self::create_memory(),
                CacheBackend::Redis => Self::create_redis(
                    config.effective_redis_url(),
                    config.connection_timeout(),
                )?,
            }
        };

        let cache = cache.with_namespace(config.namespace.as_str());
        info!(
            provider = cache.provider_name(),
            namespace = cache.namespace().unwrap_or(""),
            "Cache provider created"
        );
        Ok(cache)
    }

    /// Create an in-memory cache
    pub fn create_memory() -> DistributedCache {
        DistributedCache::new(InMemoryCacheProvider::new())
    }

    /// Create a Redis-backed cache
    pub fn create_redis(connection_string: &str, connect_timeout: Duration) -> Result<DistributedCache> {
        let provider =
            RedisCacheProvider::new(connection_string)?.with_connect_timeout(connect_timeout);
        Ok(DistributedCache::new(provider))
    }

    /// Create a cache that stores nothing
    pub fn create_null() -> DistributedCache {
        DistributedCache::new(NullCacheProvider::new())
    }
}
