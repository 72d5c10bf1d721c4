//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use thiserror::Error;
use weightvar::RewriteError;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("failed to initialise telemetry: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Rewrite(#[from] RewriteError),
    #[error("failed to emit confirmation: {0}")]
    EmitConfirmation(io::Error),
}
