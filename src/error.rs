use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollbackGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Migration path `{}` is not a directory or file", path.display())]
    PathNotFound { path: PathBuf },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl RollbackGuardError {
    /// Short category label used as the heading of stderr error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::InvalidPattern { .. } | Self::TomlParse(_) => "Config",
            Self::PathNotFound { .. } => "Path",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Optional underlying cause, rendered as a detail line.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable hint for the user, if one applies.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::PathNotFound { .. } => {
                Some("pass an existing migrations directory or migration file")
            }
            Self::InvalidPattern { .. } => Some("check the glob syntax of your exclude patterns"),
            Self::TomlParse(_) => Some("run `rollback-guard config validate` to check the file"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RollbackGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
