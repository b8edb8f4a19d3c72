use std::path::{Path, PathBuf};

use crate::error::{Result, RollbackGuardError};

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};
use super::validation::validate_config_semantics;

/// Result of loading a configuration, containing both the config and where it
/// came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// The file the configuration was read from; `None` for built-in defaults.
    pub source: Option<PathBuf>,
}

impl LoadResult {
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            config: Config::default(),
            source: None,
        }
    }
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be read or parsed.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file does not exist, cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

pub const LOCAL_CONFIG_NAME: &str = ".rollback-guard.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.rollback-guard.toml` in current directory
/// 2. `config.toml` in the platform-specific user config directory
/// 3. `Config::default()` if no config found
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// `None` when no file exists at `path`.
    fn read_config(&self, path: &Path) -> Result<Option<LoadResult>> {
        let content =
            self.fs
                .read_if_present(path)
                .map_err(|source| RollbackGuardError::FileRead {
                    path: path.to_path_buf(),
                    source,
                })?;
        let Some(content) = content else {
            return Ok(None);
        };

        let config = parse_config(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");

        Ok(Some(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        }))
    }
}

/// Parse and validate configuration text.
///
/// # Errors
/// Returns an error if the TOML is malformed or semantically invalid.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    validate_config_semantics(&config)?;
    Ok(config)
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        let dirs = self.fs.search_dirs();
        let candidates = [
            dirs.working.map(|dir| dir.join(LOCAL_CONFIG_NAME)),
            dirs.user.map(|dir| dir.join(USER_CONFIG_NAME)),
        ];

        for path in candidates.into_iter().flatten() {
            if let Some(result) = self.read_config(&path)? {
                return Ok(result);
            }
        }

        tracing::debug!("no configuration file found, using defaults");
        Ok(LoadResult::defaults())
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        self.read_config(path)?.ok_or_else(|| {
            RollbackGuardError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
