pub mod check;
pub mod config;
pub mod init;

pub use check::{build_runner, run_check, run_check_impl};
pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};

use std::path::Path;

use crate::Result;
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};

/// Load configuration from `config_path`, or the default search locations.
///
/// # Errors
/// Returns an error if an explicit path does not exist or a file found is invalid.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        tracing::debug!("configuration loading disabled");
        return Ok(LoadResult::defaults());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}
