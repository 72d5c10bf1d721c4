//! Structured telemetry initialisation for the CLI.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::{Subscriber, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use weightvar_config::{Config, LogFormat};

static TELEMETRY_GUARD: OnceCell<()> = OnceCell::new();

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to parse the configured log filter expression.
    #[error("invalid log filter: {0}")]
    Filter(String),
    /// Failed to install the tracing subscriber.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(SetGlobalDefaultError),
}

/// Configures the global tracing subscriber when invoked for the first time.
///
/// Repeated calls are idempotent: only the first successful invocation
/// installs the subscriber, later calls keep the existing registration.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] when the configured filter does not
/// parse and [`TelemetryError::Subscriber`] when another global subscriber is
/// already installed.
pub fn initialise(config: &Config) -> Result<(), TelemetryError> {
    TELEMETRY_GUARD
        .get_or_try_init(|| install_subscriber(config))
        .map(|_| ())
}

fn install_subscriber(config: &Config) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(config.log_filter())
        .map_err(|error| TelemetryError::Filter(error.to_string()))?;

    let builder = |filter: EnvFilter| {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_writer(io::stderr)
            // Colour only on interactive terminals.
            .with_ansi(io::stderr().is_terminal())
            .with_timer(fmt::time::UtcTime::rfc_3339())
    };

    let subscriber: Box<dyn Subscriber + Send + Sync> = match config.log_format() {
        LogFormat::Json => Box::new(builder(filter).json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder(filter).compact().finish()),
    };

    tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_filters() {
        let config = Config {
            log_filter: "weightvar=loud".to_owned(),
            ..Config::default()
        };
        let error = install_subscriber(&config).expect_err("filter should not parse");
        assert!(matches!(error, TelemetryError::Filter(_)), "{error:?}");
    }
}
