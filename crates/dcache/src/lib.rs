//! # dcache
//!
//! A typed distributed cache: scalar values, hash-like collections of rows,
//! prefix listing and deletion, over Redis or an in-memory store.
//!
//! ## Example
//!
//! ```ignore
//! use dcache::infrastructure::cache::CacheProviderFactory;
//!
//! let cache = CacheProviderFactory::create_memory();
//! cache.set_row("countries", "fr", &"France").await?;
//! let name: Option<String> = cache.read_row("countries", "fr").await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - the `CacheProvider` port and the error type
//! - `providers` - Redis, in-memory and null backends
//! - `infrastructure` - typed facade, factory, config, logging, health
//! - `cli` - the `dcache` command line

/// Domain layer - the cache port and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use dcache_domain::*;
}

/// Backend implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use dcache_providers::*;
}

/// Infrastructure layer - typed cache, configuration and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use dcache_infrastructure::*;
}

pub mod cli;

pub use dcache_domain::error::{Error, Result};
pub use dcache_infrastructure::cache::{CacheProviderFactory, DistributedCache};
