use std::fs;

use crate::cli::InitArgs;
use crate::output::ErrorOutput;
use crate::{EXIT_FAILURE, EXIT_SUCCESS, Result, RollbackGuardError};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::stderr().print_error(&e);
            EXIT_FAILURE
        }
    }
}

/// Writes the configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(RollbackGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# rollback-guard configuration file

[check]
# Method every migration must implement as a single throw (default: "down")
method = "down"

# Only directory entries ending with this suffix are checked (default: ".php")
suffix = ".php"

# Glob patterns for directory entries to skip
# exclude = ["**/*Seeder.php"]
exclude = []

# Check files on all cores (default: true)
parallel = true

# Print a compliant rollback method after failures (default: true)
show_example = true
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
