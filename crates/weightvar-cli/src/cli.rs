//! CLI argument definitions for weightvar.

use camino::Utf8PathBuf;
use clap::Parser;

/// Stylesheet processed when no path is given.
pub(crate) const DEFAULT_STYLESHEET: &str = "main.css";

const CONFIGURATION_HELP: &str = "\
Configuration flags must precede PATH:
  --config-path <FILE>    Read configuration from FILE
  --log-filter <FILTER>   Diagnostic filter, e.g. `debug` [env: WEIGHTVAR_LOG_FILTER]
  --log-format <FORMAT>   `compact` or `json` [env: WEIGHTVAR_LOG_FORMAT]";

/// Command-line interface for the weightvar stylesheet rewriter.
#[derive(Parser, Debug)]
#[command(
    name = "weightvar",
    version,
    about = "Rewrites numeric font-weight declarations into var(--m-*) references",
    after_help = CONFIGURATION_HELP
)]
pub(crate) struct Cli {
    /// Stylesheet to rewrite; the result is written to `modified_<PATH>`.
    #[arg(value_name = "PATH", default_value = DEFAULT_STYLESHEET)]
    pub(crate) path: Utf8PathBuf,
}
