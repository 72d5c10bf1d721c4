//! Rewrites numeric CSS `font-weight` declarations into custom property
//! references.
//!
//! The crate provides:
//!
//! - **Weight mapping** via [`WeightKeyword`] and [`WEIGHT_MAPPING`], the fixed
//!   table from the nine CSS weight keywords to `--m-*` custom properties
//! - **Declaration rewriting** via [`rewrite_font_weights`], a single pattern
//!   substitution over a stylesheet buffer
//! - **File processing** via [`process_file`], which reads a stylesheet and
//!   writes the rewritten copy to [`output_path_for`] the input
//!
//! # Example
//!
//! ```
//! use weightvar::rewrite_font_weights;
//!
//! let result = rewrite_font_weights("body { font-weight: 700; color: red; }");
//! assert_eq!(
//!     result.output(),
//!     "body { font-weight: var(--m-bold); color: red; }"
//! );
//! assert_eq!(result.num_replacements(), 1);
//! ```
//!
//! Declarations whose value is three digits but not a weight keyword, such as
//! `font-weight: 650;`, are left exactly as written.

mod error;
mod file;
mod mapping;
mod rewriter;

pub use error::RewriteError;
pub use file::{OUTPUT_PREFIX, ProcessedFile, output_path_for, process_file, process_file_to};
pub use mapping::{WEIGHT_MAPPING, WeightKeyword, custom_property_for};
pub use rewriter::{RewriteResult, rewrite_font_weights};

#[cfg(test)]
mod tests;
