//! Configuration semantic validation.
//!
//! Runs after parsing: the TOML may be well-formed but still unusable.

use crate::config::Config;
use crate::{Result, RollbackGuardError};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the method name is not a PHP identifier, the suffix is
/// empty, or an exclude pattern is not a valid glob.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_method_name(&config.check.method)?;
    validate_suffix(&config.check.suffix)?;
    validate_glob_patterns(&config.check.exclude)?;
    Ok(())
}

/// PHP identifiers: a letter, underscore or non-ASCII byte, then also digits.
fn is_php_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic() || !c.is_ascii())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric() || !c.is_ascii())
}

fn validate_method_name(method: &str) -> Result<()> {
    if method.is_empty() {
        return Err(RollbackGuardError::Config(
            "check.method must not be empty".to_string(),
        ));
    }
    if !is_php_identifier(method) {
        return Err(RollbackGuardError::Config(format!(
            "check.method `{method}` is not a valid method name"
        )));
    }
    Ok(())
}

fn validate_suffix(suffix: &str) -> Result<()> {
    if suffix.is_empty() {
        return Err(RollbackGuardError::Config(
            "check.suffix must not be empty".to_string(),
        ));
    }
    if suffix.contains(['/', '\\']) {
        return Err(RollbackGuardError::Config(format!(
            "check.suffix `{suffix}` must not contain path separators"
        )));
    }
    Ok(())
}

fn validate_glob_patterns(patterns: &[String]) -> Result<()> {
    for pattern in patterns {
        globset::Glob::new(pattern).map_err(|e| RollbackGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
