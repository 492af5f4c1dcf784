//! Result adapters for foreign errors
//!
//! Config loading touches figment, `toml` and the file system. Their errors
//! are folded into the domain [`Error`] with a message naming the failed step
//! and the original error kept as `source`.

use dcache_domain::error::{Error, Result};
use std::fmt::Display;

/// Attach a step description to a foreign error
///
/// ```ignore
/// use dcache_infrastructure::error_ext::ErrorContext;
///
/// let text = toml::to_string_pretty(&config).context("Failed to serialize config to TOML")?;
/// std::fs::write(&path, text).io_context("Failed to write config file")?;
/// ```
pub trait ErrorContext<T> {
    /// Fold into [`Error::Infrastructure`]
    fn context(self, step: impl Display) -> Result<T>;

    /// Fold into [`Error::Io`]
    fn io_context(self, step: impl Display) -> Result<T>;

    /// Fold into [`Error::Configuration`]
    fn config_context(self, step: impl Display) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, step: impl Display) -> Result<T> {
        self.map_err(|e| Error::infrastructure_with_source(describe(&step, &e), e))
    }

    fn io_context(self, step: impl Display) -> Result<T> {
        self.map_err(|e| Error::io_with_source(describe(&step, &e), e))
    }

    fn config_context(self, step: impl Display) -> Result<T> {
        self.map_err(|e| Error::configuration_with_source(describe(&step, &e), e))
    }
}

fn describe(step: &impl Display, cause: &impl Display) -> String {
    format!("{step}: {cause}")
}
