//! # dcache - Provider Implementations
//!
//! Every backend implements the `CacheProvider` port defined in
//! `dcache-domain`.
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`RedisCacheProvider`](cache::RedisCacheProvider) | Remote | Redis strings, hashes and key scans |
//! | [`InMemoryCacheProvider`](cache::InMemoryCacheProvider) | Local | Dictionary stand-in for tests |
//! | [`NullCacheProvider`](cache::NullCacheProvider) | Disabled | Stores nothing |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! dcache-providers = { version = "0.1", default-features = false, features = ["cache-memory"] }
//! ```

// Re-export dcache-domain types commonly used with providers
pub use dcache_domain::error::{Error, Result};
pub use dcache_domain::ports::providers::CacheProvider;

/// Provider-specific constants
pub mod constants;

/// Cache provider implementations
///
/// Implements `CacheProvider` trait for caching backends.
pub mod cache;
