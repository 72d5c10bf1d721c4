//! Shared configuration for the weightvar tool.
//!
//! [`Config`] is loaded with `ortho_config`, which layers values in
//! increasing precedence: built-in defaults, a configuration file
//! (`--config-path`, `WEIGHTVAR_CONFIG_PATH`, or a discovered
//! `.weightvar.toml`), `WEIGHTVAR_*` environment variables, and finally
//! command-line flags.

use std::ffi::OsString;
use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use serde::{Deserialize, Serialize};

mod defaults;
mod logging;

pub use defaults::{
    DEFAULT_LOG_FILTER, default_log_filter, default_log_filter_string, default_log_format,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved configuration for a weightvar invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "WEIGHTVAR")]
pub struct Config {
    /// `tracing` filter expression applied to diagnostics.
    #[serde(default = "default_log_filter_string")]
    pub log_filter: String,
    /// Output format for diagnostics written to stderr.
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from the given command-line arguments, the
    /// environment and any configuration file.
    ///
    /// The first argument is the program name. Only configuration flags may
    /// appear in `args`.
    ///
    /// # Errors
    ///
    /// Returns the loader error when a source is malformed or a value fails
    /// to deserialise.
    pub fn load_from_iter<I, T>(args: I) -> Result<Self, Arc<OrthoError>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as OrthoConfig>::load_from_iter(args)
    }

    /// Returns the configured log filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the configured log format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_quiet_compact_logging() {
        let config = Config::default();
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
        assert_eq!(config.log_format(), LogFormat::Compact);
    }
}
