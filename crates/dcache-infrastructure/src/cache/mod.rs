//! Typed cache access and provider wiring
//!
//! Provider implementations are in the dcache-providers crate; the port is
//! in dcache-domain. This module adds the typed facade, the JSON codec and
//! the configuration-driven factory.

pub mod codec;
pub mod factory;
pub mod provider;

pub use factory::CacheProviderFactory;
pub use provider::DistributedCache;
