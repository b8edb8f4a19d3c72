use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, RollbackGuardError};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Keeps directory entries whose file name ends with a suffix and which match
/// none of the exclude patterns.
pub struct SuffixFilter {
    suffix: String,
    exclude_patterns: GlobSet,
}

impl SuffixFilter {
    /// Create a new filter with the given suffix and exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(suffix: impl Into<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| RollbackGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| RollbackGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            suffix: suffix.into(),
            exclude_patterns,
        })
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    fn has_suffix(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(&self.suffix))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for SuffixFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_suffix(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
