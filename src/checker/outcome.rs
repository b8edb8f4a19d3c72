use std::fmt;
use std::path::{Path, PathBuf};

/// Why a migration file failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The candidate exists but is not a regular file (e.g. a directory named `x.php`).
    NotAFileOrDirectory,
    /// The file could not be read.
    ReadError(String),
    /// The file is not syntactically valid.
    ParseError(String),
    /// No method with the rollback name was found.
    MissingRollbackMethod,
    /// The rollback method has no statements.
    EmptyRollbackBody,
    /// The rollback method does something other than a single throw.
    RollbackBodyNotSoleThrow,
}

impl FailureReason {
    /// Stable identifier used in machine-readable output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotAFileOrDirectory => "not_a_file",
            Self::ReadError(_) => "read_error",
            Self::ParseError(_) => "parse_error",
            Self::MissingRollbackMethod => "missing_rollback_method",
            Self::EmptyRollbackBody => "empty_rollback_body",
            Self::RollbackBodyNotSoleThrow => "rollback_body_not_sole_throw",
        }
    }

    /// Human-readable message for a failing migration.
    #[must_use]
    pub fn message(&self, path: &Path, method_name: &str) -> String {
        let path = path.display();
        match self {
            Self::NotAFileOrDirectory => format!("Migration `{path}` is not a file"),
            Self::ReadError(message) => format!("Migration `{path}` could not be read: {message}"),
            Self::ParseError(message) => format!("Migration `{path}` parse error: {message}"),
            Self::MissingRollbackMethod => {
                format!("Migration `{path}` missing `{method_name}` method")
            }
            Self::EmptyRollbackBody => format!(
                "Migration `{path}` does not have any statements, must throw Exception"
            ),
            Self::RollbackBodyNotSoleThrow => format!(
                "Migration `{path}` should throw an Exception in `{method_name}` method, nothing more"
            ),
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAFileOrDirectory => f.write_str("not a file"),
            Self::ReadError(message) => write!(f, "read error: {message}"),
            Self::ParseError(message) => write!(f, "parse error: {message}"),
            Self::MissingRollbackMethod => f.write_str("missing rollback method"),
            Self::EmptyRollbackBody => f.write_str("empty rollback body"),
            Self::RollbackBodyNotSoleThrow => f.write_str("rollback body is not a sole throw"),
        }
    }
}

/// Classification of one migration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Pass,
    Fail(FailureReason),
}

impl ValidationOutcome {
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    #[must_use]
    pub const fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    #[must_use]
    pub const fn reason(&self) -> Option<&FailureReason> {
        match self {
            Self::Pass => None,
            Self::Fail(reason) => Some(reason),
        }
    }
}

/// Outcome paired with the file it was produced for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub outcome: ValidationOutcome,
}

impl FileOutcome {
    #[must_use]
    pub fn pass(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            outcome: ValidationOutcome::Pass,
        }
    }

    #[must_use]
    pub fn fail(path: impl Into<PathBuf>, reason: FailureReason) -> Self {
        Self {
            path: path.into(),
            outcome: ValidationOutcome::Fail(reason),
        }
    }

    #[must_use]
    pub const fn is_pass(&self) -> bool {
        self.outcome.is_pass()
    }

    #[must_use]
    pub const fn is_fail(&self) -> bool {
        self.outcome.is_fail()
    }

    #[must_use]
    pub const fn reason(&self) -> Option<&FailureReason> {
        self.outcome.reason()
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
