//! Reads a stylesheet, rewrites it and writes the modified copy.
//!
//! The destination is derived textually: [`OUTPUT_PREFIX`] is prepended to
//! the whole input path string, not to its final component. An input of
//! `styles/main.css` therefore produces `modified_styles/main.css`, which
//! only succeeds when a `modified_styles` directory exists.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use crate::error::RewriteError;
use crate::rewriter::rewrite_font_weights;

/// Prefix prepended to the input path to form the output path.
pub const OUTPUT_PREFIX: &str = "modified_";

/// Derives the output path for `input` by prefixing [`OUTPUT_PREFIX`].
#[must_use]
pub fn output_path_for(input: &Utf8Path) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("{OUTPUT_PREFIX}{input}"))
}

/// Outcome of processing one stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    input: Utf8PathBuf,
    output: Utf8PathBuf,
    num_replacements: usize,
}

impl ProcessedFile {
    /// Path of the stylesheet that was read.
    #[must_use]
    pub fn input(&self) -> &Utf8Path {
        &self.input
    }

    /// Path the rewritten stylesheet was written to.
    #[must_use]
    pub fn output(&self) -> &Utf8Path {
        &self.output
    }

    /// Number of declarations replaced with a custom property.
    #[must_use]
    pub const fn num_replacements(&self) -> usize {
        self.num_replacements
    }
}

/// Rewrites `input` into the file named by [`output_path_for`].
///
/// # Errors
///
/// Returns [`RewriteError::ReadInput`] when the stylesheet cannot be read and
/// [`RewriteError::WriteOutput`] when the destination cannot be written.
pub fn process_file(input: &Utf8Path) -> Result<ProcessedFile, RewriteError> {
    process_file_to(input, &output_path_for(input))
}

/// Rewrites `input` into `output`, replacing any existing file there.
///
/// The input is read completely and its handle released before the output
/// is opened. The input file is never modified.
///
/// # Errors
///
/// Returns [`RewriteError::ReadInput`] when the stylesheet cannot be read and
/// [`RewriteError::WriteOutput`] when the destination cannot be written.
pub fn process_file_to(input: &Utf8Path, output: &Utf8Path) -> Result<ProcessedFile, RewriteError> {
    debug!(path = %input, "reading stylesheet");
    let css = fs::read_to_string(input).map_err(|source| RewriteError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;

    let result = rewrite_font_weights(&css);
    let num_replacements = result.num_replacements();

    debug!(path = %output, bytes = result.output().len(), "writing rewritten stylesheet");
    fs::write(output, result.output()).map_err(|source| RewriteError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        input = %input,
        output = %output,
        replacements = num_replacements,
        "rewrote font-weight declarations"
    );

    Ok(ProcessedFile {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        num_replacements,
    })
}
