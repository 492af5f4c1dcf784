//! # dcache - Infrastructure Layer
//!
//! Everything around the cache port that is not a backend:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | Typed [`DistributedCache`](cache::DistributedCache) facade and factory |
//! | [`config`] | Figment-based layered configuration |
//! | [`logging`] | tracing subscriber setup |
//! | [`health`] | Backend ping as a health record |
//! | [`error_ext`] | Context helpers mapping foreign errors into the domain error |

pub mod cache;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod health;
pub mod logging;

pub use error_ext::ErrorContext;
