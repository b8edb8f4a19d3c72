use serde::{Deserialize, Serialize};

/// Rollback method name used by Phinx, Doctrine and Laravel migrations.
pub const DEFAULT_METHOD: &str = "down";

/// Migration file suffix used when listing directories.
pub const DEFAULT_SUFFIX: &str = ".php";

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub check: CheckConfig,
}

/// Settings of the `check` command [check].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Name of the rollback method that must throw.
    #[serde(default = "default_method")]
    pub method: String,

    /// File name suffix of migrations inside scanned directories.
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Glob patterns excluding directory entries from the check.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Check files on all cores.
    #[serde(default = "default_true")]
    pub parallel: bool,

    /// Print a compliant rollback method after failures.
    #[serde(default = "default_true")]
    pub show_example: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            method: default_method(),
            suffix: default_suffix(),
            exclude: Vec::new(),
            parallel: true,
            show_example: true,
        }
    }
}

fn default_method() -> String {
    DEFAULT_METHOD.to_string()
}

fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
