use crate::logging::LogFormat;

/// Default log filter expression used by the binary.
///
/// The confirmation line is the tool's only routine output, so diagnostics
/// stay quiet unless something goes wrong.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default log filter expression used by the binary.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binary.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Compact
}
