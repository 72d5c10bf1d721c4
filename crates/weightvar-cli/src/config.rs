//! Configuration loading helpers for the weightvar CLI.
//!
//! Leading configuration flags are split off for `ortho_config` so the loader
//! only receives flags it understands, while `clap` parses the remaining
//! stylesheet arguments.

use std::ffi::{OsStr, OsString};

use weightvar_config::Config;

use crate::AppError;

pub(crate) trait ConfigLoader {
    /// Loads configuration for the CLI.
    ///
    /// # Flag Ordering
    ///
    /// Configuration flags (listed in `CONFIG_CLI_FLAGS`) must appear before
    /// the stylesheet path. Flags after the path are handed to `clap`, which
    /// rejects them.
    fn load(&self, args: &[OsString]) -> Result<Config, AppError>;
}

pub(crate) struct OrthoConfigLoader;

#[derive(Debug, Clone, Copy)]
enum FlagAction {
    Include { needs_value: bool },
    Skip,
}

impl ConfigLoader for OrthoConfigLoader {
    fn load(&self, args: &[OsString]) -> Result<Config, AppError> {
        Config::load_from_iter(args.iter().cloned()).map_err(AppError::LoadConfiguration)
    }
}

impl OrthoConfigLoader {
    fn process_config_flag(argument: &OsStr) -> FlagAction {
        let argument_text = argument.to_string_lossy();
        if !argument_text.starts_with("--") {
            return FlagAction::Skip;
        }

        let (flag, has_inline_value) = match argument_text.split_once('=') {
            Some((flag, _)) => (flag, true),
            None => (argument_text.as_ref(), false),
        };

        if super::CONFIG_CLI_FLAGS.contains(&flag) {
            return FlagAction::Include {
                needs_value: !has_inline_value,
            };
        }

        FlagAction::Skip
    }
}

pub(crate) struct ConfigArgumentSplit {
    pub(crate) config_arguments: Vec<OsString>,
    pub(crate) command_start: usize,
}

pub(crate) fn split_config_arguments(args: &[OsString]) -> ConfigArgumentSplit {
    let Some((program, rest)) = args.split_first() else {
        return ConfigArgumentSplit {
            config_arguments: Vec::new(),
            command_start: 0,
        };
    };

    let mut config_arguments = vec![program.clone()];
    let mut pending_value = false;

    for argument in rest {
        if pending_value {
            config_arguments.push(argument.clone());
            pending_value = false;
            continue;
        }

        match OrthoConfigLoader::process_config_flag(argument.as_os_str()) {
            FlagAction::Include { needs_value } => {
                config_arguments.push(argument.clone());
                pending_value = needs_value;
            }
            FlagAction::Skip => break,
        }
    }

    let command_start = config_arguments.len();
    ConfigArgumentSplit {
        config_arguments,
        command_start,
    }
}

/// Rebuilds the argument list seen by `clap`: the program name followed by
/// everything after the configuration flags.
pub(crate) fn prepare_cli_arguments(
    args: &[OsString],
    split: &ConfigArgumentSplit,
) -> Vec<OsString> {
    args.first()
        .into_iter()
        .chain(args.iter().skip(split.command_start.max(1)))
        .cloned()
        .collect()
}
