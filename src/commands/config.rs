use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{LoadResult, parse_config};
use crate::output::ErrorOutput;
use crate::{EXIT_FAILURE, EXIT_SUCCESS, Result, RollbackGuardError};

use super::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let result = match &args.action {
        ConfigAction::Validate { config } => run_config_validate_impl(config).map(|()| {
            println!("Configuration is valid: {}", config.display());
        }),
        ConfigAction::Show { config, format } => {
            run_config_show_impl(config.as_deref(), *format, cli.no_config)
                .map(|output| print!("{output}"))
        }
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print_error(&e);
            EXIT_FAILURE
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(RollbackGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path).map_err(|source| RollbackGuardError::FileRead {
        path: config_path.to_path_buf(),
        source,
    })?;
    parse_config(&content)?;

    Ok(())
}

/// Renders the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    no_config: bool,
) -> Result<String> {
    let loaded = load_config(config_path, no_config)?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => Ok(format_config_text(&loaded)),
    }
}

#[must_use]
pub fn format_config_text(loaded: &LoadResult) -> String {
    let check = &loaded.config.check;
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n");
    match &loaded.source {
        Some(path) => {
            let _ = writeln!(output, "Source: {}", path.display());
        }
        None => output.push_str("Source: built-in defaults\n"),
    }

    output.push_str("\n[check]\n");
    let _ = writeln!(output, "  method = {:?}", check.method);
    let _ = writeln!(output, "  suffix = {:?}", check.suffix);
    let _ = writeln!(output, "  exclude = {:?}", check.exclude);
    let _ = writeln!(output, "  parallel = {}", check.parallel);
    let _ = writeln!(output, "  show_example = {}", check.show_example);

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
