//! # dcache Domain Layer
//!
//! Core types shared by every layer of dcache: the error taxonomy and the
//! [`CacheProvider`](ports::providers::CacheProvider) port that the remote and
//! in-memory backends implement.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error type and `Result` alias |
//! | [`constants`] | Provider names and key conventions |
//! | [`ports`] | Boundary contracts implemented by `dcache-providers` |

pub mod constants;
pub mod error;
pub mod ports;

pub use error::{Error, Result};
pub use ports::providers::CacheProvider;
