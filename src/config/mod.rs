mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem, SearchDirs};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult, parse_config};
pub use model::{CheckConfig, Config, DEFAULT_METHOD, DEFAULT_SUFFIX};
pub use validation::validate_config_semantics;
