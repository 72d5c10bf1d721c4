//! Command-line interface runtime for the weightvar stylesheet rewriter.
//!
//! The module owns argument parsing, configuration bootstrapping, telemetry
//! setup and the single read-rewrite-write invocation. The interface is
//! exercised both from the binary entrypoint and from tests where
//! configuration loading and IO streams can be substituted.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use weightvar::{ProcessedFile, process_file};

mod cli;
mod config;
mod errors;
pub mod telemetry;

use cli::Cli;
pub(crate) use config::{ConfigLoader, OrthoConfigLoader};
use config::{prepare_cli_arguments, split_config_arguments};
pub(crate) use errors::AppError;

/// CLI flags recognised by the configuration loader.
///
/// MAINTENANCE: This list must be kept in sync with the fields of
/// `weightvar_config::Config` plus the loader's `--config-path` flag.
const CONFIG_CLI_FLAGS: &[&str] = &["--config-path", "--log-filter", "--log-format"];

struct CliRunner<'a, W: Write, E: Write, L: ConfigLoader> {
    stdout: &'a mut W,
    stderr: &'a mut E,
    loader: &'a L,
}

impl<'a, W, E, L> CliRunner<'a, W, E, L>
where
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    fn new(stdout: &'a mut W, stderr: &'a mut E, loader: &'a L) -> Self {
        Self {
            stdout,
            stderr,
            loader,
        }
    }

    fn run<I>(&mut self, args: I) -> ExitCode
    where
        I: IntoIterator<Item = OsString>,
    {
        let args: Vec<OsString> = args.into_iter().collect();
        let split = split_config_arguments(&args);
        let cli_arguments = prepare_cli_arguments(&args, &split);

        let cli = match Cli::try_parse_from(cli_arguments) {
            Ok(cli) => cli,
            Err(error) if is_informational(&error) => {
                let _ = write!(self.stdout, "{}", error.render());
                return ExitCode::SUCCESS;
            }
            Err(error) => return self.fail(&AppError::CliUsage(error)),
        };

        let result = self
            .loader
            .load(&split.config_arguments)
            .and_then(|config| telemetry::initialise(&config).map_err(AppError::from))
            .and_then(|()| process_file(&cli.path).map_err(AppError::from))
            .and_then(|processed| self.confirm(&processed));

        match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => self.fail(&error),
        }
    }

    fn confirm(&mut self, processed: &ProcessedFile) -> Result<(), AppError> {
        writeln!(
            self.stdout,
            "File has been processed and saved as '{}'",
            processed.output()
        )
        .map_err(AppError::EmitConfirmation)
    }

    fn fail(&mut self, error: &AppError) -> ExitCode {
        let _ = writeln!(self.stderr, "{error}");
        ExitCode::FAILURE
    }
}

fn is_informational(error: &clap::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

/// Runs the CLI using the provided arguments and IO handles.
///
/// Prints one confirmation line naming the output file to `stdout` on
/// success. Every failure is written to `stderr` as a single message and
/// yields [`ExitCode::FAILURE`].
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    run_with_loader(args, stdout, stderr, &OrthoConfigLoader)
}

pub(crate) fn run_with_loader<I, W, E, L>(
    args: I,
    stdout: &mut W,
    stderr: &mut E,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    CliRunner::new(stdout, stderr, loader).run(args)
}

#[cfg(test)]
mod tests;
