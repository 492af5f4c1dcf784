//! Domain Port Interfaces
//!
//! Ports define the contracts that external layers must implement:
//! the domain declares the interface, `dcache-providers` supplies the
//! backends and `dcache-infrastructure` selects one at composition time.

/// External service provider ports
pub mod providers;

pub use providers::CacheProvider;
