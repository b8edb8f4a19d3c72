use std::io;
use std::path::{Path, PathBuf};

/// Where the loader looks for configuration files, and how it reads them.
pub trait FileSystem {
    /// Contents of `path`, or `None` when there is no file there.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read.
    fn read_if_present(&self, path: &Path) -> io::Result<Option<String>>;

    /// Directories searched for a configuration file, most specific first:
    /// the working directory, then the user config directory.
    fn search_dirs(&self) -> SearchDirs;
}

/// Directories a configuration file may live in; either may be unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDirs {
    pub working: Option<PathBuf>,
    pub user: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_if_present(&self, path: &Path) -> io::Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn search_dirs(&self) -> SearchDirs {
        SearchDirs {
            working: std::env::current_dir().ok(),
            user: directories::ProjectDirs::from("", "", "rollback-guard")
                .map(|dirs| dirs.config_dir().to_path_buf()),
        }
    }
}
