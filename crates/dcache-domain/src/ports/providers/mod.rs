//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | CacheProvider | Key/value and collection (hash) storage backends |

/// Cache provider port
pub mod cache;

pub use cache::CacheProvider;
