//! CLI entrypoint for the weightvar stylesheet rewriter.
//!
//! The binary delegates to [`weightvar_cli::run`], which loads configuration,
//! parses the stylesheet path, rewrites the file and reports the result.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    weightvar_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
