//! Cache Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullCacheProvider`] | Disabled | No-op stub |
//! | [`InMemoryCacheProvider`] | Local | Dictionary-backed, deterministic ordering |
//! | [`RedisCacheProvider`] | Remote | Redis-backed for multi-instance |
//!
//! ## Provider Selection Guide
//!
//! - **Unit tests**: `InMemoryCacheProvider`, one instance per test
//! - **Production**: `RedisCacheProvider`
//! - **Caching switched off**: `NullCacheProvider`

#[cfg(feature = "cache-memory")]
pub mod memory;
pub mod null;
#[cfg(feature = "cache-redis")]
pub mod redis;

// Re-export for convenience
#[cfg(feature = "cache-memory")]
pub use memory::{CacheValue, InMemoryCacheProvider};
pub use null::NullCacheProvider;
#[cfg(feature = "cache-redis")]
pub use redis::RedisCacheProvider;
