mod filter;

pub use filter::{FileFilter, SuffixFilter};

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use walkdir::WalkDir;

use crate::error::{Result, RollbackGuardError};

/// Trait for expanding one input path into candidate files.
pub trait FileScanner {
    /// Expand `root` into the candidate files it names.
    ///
    /// # Errors
    /// Returns an error if the path does not exist or the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Resolves migration inputs: files are taken as-is, directories contribute
/// their immediate entries that pass the filter.
pub struct MigrationScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> MigrationScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Resolve every input into one candidate list, in input order and without
    /// duplicate paths.
    ///
    /// All inputs are checked for existence before any directory is listed.
    ///
    /// # Errors
    /// Returns [`RollbackGuardError::PathNotFound`] for the first input that does
    /// not exist, or an IO error if a directory cannot be listed.
    pub fn resolve(&self, inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        if let Some(missing) = inputs.iter().find(|input| !input.exists()) {
            return Err(RollbackGuardError::PathNotFound {
                path: missing.clone(),
            });
        }

        let mut candidates: IndexSet<OsString> = IndexSet::new();
        for input in inputs {
            let files = self.scan(input)?;
            tracing::debug!(input = %input.display(), count = files.len(), "scanned input");
            candidates.extend(files.into_iter().map(PathBuf::into_os_string));
        }

        Ok(candidates.into_iter().map(PathBuf::from).collect())
    }

    fn list_directory(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let dir: PathBuf = dir.components().collect();
        let mut files = Vec::new();

        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(std::io::Error::from)?;
            if self.filter.should_include(entry.path()) {
                files.push(entry.into_path());
            } else {
                tracing::trace!(path = %entry.path().display(), "skipped entry");
            }
        }

        Ok(files)
    }
}

impl<F: FileFilter> FileScanner for MigrationScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(RollbackGuardError::PathNotFound {
                path: root.to_path_buf(),
            });
        }

        if root.is_dir() {
            self.list_directory(root)
        } else {
            Ok(vec![root.to_path_buf()])
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
