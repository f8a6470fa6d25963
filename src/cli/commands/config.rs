//! Config command implementation.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::FocusError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be written or output
/// formatting fails.
pub fn config(
    config: &Config,
    paths: &Paths,
    cmd: &ConfigCommands,
    format: OutputFormat,
) -> Result<String, FocusError> {
    match cmd {
        ConfigCommands::Show => match format {
            OutputFormat::Json => to_json(config),
            OutputFormat::Pretty => config.to_yaml(),
        },
        ConfigCommands::Path => match format {
            OutputFormat::Json => to_json(&serde_json::json!({
                "config_file": paths.config_file,
                "exists": paths.config_file.exists(),
            })),
            OutputFormat::Pretty => Ok(paths.config_file.display().to_string()),
        },
        ConfigCommands::Init { force } => init(paths, *force, format),
    }
}

fn init(paths: &Paths, force: bool, format: OutputFormat) -> Result<String, FocusError> {
    if paths.config_file.exists() && !force {
        return Err(FocusError::InvalidArgument(format!(
            "{} already exists. Use --force to overwrite it.",
            paths.config_file.display()
        )));
    }

    paths.ensure_dirs()?;
    Config::default().save_to_path(&paths.config_file)?;

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "config_file": paths.config_file,
            "written": true,
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {}",
            "Wrote".green(),
            paths.config_file.display()
        )),
    }
}
