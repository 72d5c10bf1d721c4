//! Pattern substitution of `font-weight` declarations.
//!
//! A declaration matches when the literal `font-weight:` is followed by
//! optional whitespace, exactly three decimal digits and a semicolon. Matches
//! whose value is a weight keyword are replaced wholesale with the normalised
//! `font-weight: var(--m-*);` form. Every other byte of the input, including
//! matches with unrecognised values, is copied through unchanged.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::mapping::custom_property_for;

static DECLARATION: Lazy<Regex> = Lazy::new(declaration_pattern);

#[expect(clippy::expect_used, reason = "the pattern is a compile-time literal")]
fn declaration_pattern() -> Regex {
    Regex::new(r"font-weight:\s*([0-9]{3});").expect("declaration pattern must compile")
}

/// Rewrites every recognised `font-weight` declaration in `css`.
///
/// Matches are found left to right without overlap. The input is not
/// modified; the rewritten text is returned in a [`RewriteResult`].
#[must_use]
pub fn rewrite_font_weights(css: &str) -> RewriteResult {
    let mut num_replacements: usize = 0;
    let output = DECLARATION.replace_all(css, |captures: &Captures<'_>| {
        let value = captures.get(1).map_or("", |m| m.as_str());
        match custom_property_for(value) {
            Some(property) => {
                num_replacements = num_replacements.saturating_add(1);
                format!("font-weight: var({property});")
            }
            None => captures
                .get(0)
                .map_or_else(String::new, |m| m.as_str().to_owned()),
        }
    });

    RewriteResult {
        output: output.into_owned(),
        num_replacements,
    }
}

/// Result of rewriting one stylesheet buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    output: String,
    num_replacements: usize,
}

impl RewriteResult {
    /// Returns the rewritten stylesheet.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consumes the result, returning the rewritten stylesheet.
    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }

    /// Returns the number of declarations replaced with a custom property.
    #[must_use]
    pub const fn num_replacements(&self) -> usize {
        self.num_replacements
    }

    /// Returns whether any declaration was replaced.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.num_replacements > 0
    }
}
