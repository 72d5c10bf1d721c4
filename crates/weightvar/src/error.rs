//! Error types for stylesheet processing.
//!
//! Rewriting itself cannot fail: text the declaration pattern does not match
//! is passed through. Only the file boundaries report errors.

use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing a stylesheet.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RewriteError {
    /// The input stylesheet could not be read.
    #[error("failed to read stylesheet '{path}': {source}")]
    ReadInput {
        /// Path that was being read.
        path: Utf8PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// The rewritten stylesheet could not be written.
    #[error("failed to write rewritten stylesheet '{path}': {source}")]
    WriteOutput {
        /// Destination path that was being written.
        path: Utf8PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },
}

impl RewriteError {
    /// Returns the path involved in the failure.
    #[must_use]
    pub fn path(&self) -> &Utf8PathBuf {
        match self {
            Self::ReadInput { path, .. } | Self::WriteOutput { path, .. } => path,
        }
    }

    /// Returns the kind of the underlying filesystem error.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::ReadInput { source, .. } | Self::WriteOutput { source, .. } => source.kind(),
        }
    }
}
