use std::path::PathBuf;

use crate::checker::FileOutcome;
use crate::error::RollbackGuardError;
use crate::{EXIT_FAILURE, EXIT_SUCCESS};

/// Counts of a finished run and the resulting exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub files_analyzed: usize,
    pub errors_count: usize,
    pub exit_code: i32,
}

impl RunSummary {
    /// Summarize recorded outcomes. No files at all is a failure.
    #[must_use]
    pub fn from_outcomes(outcomes: &[FileOutcome]) -> Self {
        let files_analyzed = outcomes.len();
        let errors_count = outcomes.iter().filter(|o| o.is_fail()).count();
        let exit_code = if files_analyzed == 0 || errors_count > 0 {
            EXIT_FAILURE
        } else {
            EXIT_SUCCESS
        };

        Self {
            files_analyzed,
            errors_count,
            exit_code,
        }
    }

    /// Summary of a run stopped before any file was checked.
    #[must_use]
    pub const fn aborted() -> Self {
        Self {
            files_analyzed: 0,
            errors_count: 0,
            exit_code: EXIT_FAILURE,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.exit_code == EXIT_SUCCESS
    }
}

/// Why a run stopped before checking files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunAbort {
    /// An input path does not exist.
    PathNotFound(PathBuf),
    /// A directory could not be listed.
    ScanFailed(String),
    /// Inputs resolved to zero migration files.
    NoMigrationFiles,
}

impl RunAbort {
    #[must_use]
    pub fn from_error(error: RollbackGuardError) -> Self {
        match error {
            RollbackGuardError::PathNotFound { path } => Self::PathNotFound(path),
            other => Self::ScanFailed(other.to_string()),
        }
    }

    /// Human-readable message; `searched_paths` are the run's inputs.
    #[must_use]
    pub fn message(&self, searched_paths: &[PathBuf]) -> String {
        match self {
            Self::PathNotFound(path) => {
                format!("Migration path `{}` is not a directory or file", path.display())
            }
            Self::ScanFailed(message) => format!("Could not list migration files: {message}"),
            Self::NoMigrationFiles => {
                let paths: Vec<_> = searched_paths
                    .iter()
                    .map(|p| format!("`{}`", p.display()))
                    .collect();
                format!("No migration files found in path {}", paths.join(", "))
            }
        }
    }
}

/// Everything a formatter needs to render a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub searched_paths: Vec<PathBuf>,
    pub method_name: String,
    pub outcomes: Vec<FileOutcome>,
    pub summary: RunSummary,
    pub abort: Option<RunAbort>,
}

impl RunReport {
    #[must_use]
    pub fn completed(
        searched_paths: Vec<PathBuf>,
        method_name: impl Into<String>,
        outcomes: Vec<FileOutcome>,
    ) -> Self {
        let summary = RunSummary::from_outcomes(&outcomes);
        Self {
            searched_paths,
            method_name: method_name.into(),
            outcomes,
            summary,
            abort: None,
        }
    }

    #[must_use]
    pub fn aborted(
        searched_paths: Vec<PathBuf>,
        method_name: impl Into<String>,
        abort: RunAbort,
    ) -> Self {
        Self {
            searched_paths,
            method_name: method_name.into(),
            outcomes: Vec::new(),
            summary: RunSummary::aborted(),
            abort: Some(abort),
        }
    }

    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.summary.exit_code
    }

    /// The compliant-rollback example is shown iff any file failed.
    #[must_use]
    pub const fn show_example(&self) -> bool {
        self.summary.errors_count > 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_fail())
    }

    pub fn passes(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_pass())
    }

    #[must_use]
    pub fn abort_message(&self) -> Option<String> {
        self.abort
            .as_ref()
            .map(|abort| abort.message(&self.searched_paths))
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
