mod report;

pub use report::{RunAbort, RunReport, RunSummary};

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::checker::{Checker, FailureReason, FileOutcome, MigrationChecker};
use crate::output::ScanProgress;
use crate::scanner::{FileFilter, MigrationScanner};
use crate::syntax::SourceParser;

/// Drives resolve → read → parse → locate → check over every migration.
pub struct ValidationRunner<P: SourceParser, F: FileFilter> {
    scanner: MigrationScanner<F>,
    parser: P,
    checker: MigrationChecker,
    parallel: bool,
    progress: Option<ScanProgress>,
}

impl<P: SourceParser, F: FileFilter + Sync> ValidationRunner<P, F> {
    #[must_use]
    pub fn new(scanner: MigrationScanner<F>, parser: P, checker: MigrationChecker) -> Self {
        Self {
            scanner,
            parser,
            checker,
            parallel: true,
            progress: None,
        }
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ScanProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Validate every migration the inputs resolve to.
    ///
    /// Never fails: unusable inputs produce an aborted report, per-file
    /// problems become failed outcomes.
    #[must_use]
    pub fn run(&self, inputs: &[PathBuf]) -> RunReport {
        let method_name = self.checker.method_name().to_string();

        let candidates = match self.scanner.resolve(inputs) {
            Ok(candidates) => candidates,
            Err(err) => {
                tracing::debug!(error = %err, "path resolution failed");
                return RunReport::aborted(inputs.to_vec(), method_name, RunAbort::from_error(err));
            }
        };

        if candidates.is_empty() {
            return RunReport::aborted(inputs.to_vec(), method_name, RunAbort::NoMigrationFiles);
        }

        tracing::debug!(count = candidates.len(), parallel = self.parallel, "checking migrations");
        if let Some(progress) = &self.progress {
            progress.set_total(candidates.len());
        }
        let outcomes = self.check_all(&candidates);

        if let Some(progress) = &self.progress {
            tracing::debug!(checked = progress.position(), "migrations checked");
            progress.finish();
        }

        RunReport::completed(inputs.to_vec(), method_name, outcomes)
    }

    /// Outcomes come back in candidate order in both modes.
    fn check_all(&self, candidates: &[PathBuf]) -> Vec<FileOutcome> {
        if self.parallel {
            candidates
                .par_iter()
                .map(|path| self.check_and_tick(path))
                .collect()
        } else {
            candidates
                .iter()
                .map(|path| self.check_and_tick(path))
                .collect()
        }
    }

    fn check_and_tick(&self, path: &Path) -> FileOutcome {
        let outcome = self.check_file(path);
        if let Some(progress) = &self.progress {
            progress.inc();
        }

        match outcome.reason() {
            None => tracing::debug!(path = %path.display(), "passed"),
            Some(reason) => tracing::debug!(path = %path.display(), %reason, "failed"),
        }
        outcome
    }

    /// Check one file; every failure is captured in the outcome.
    pub fn check_file(&self, path: &Path) -> FileOutcome {
        if !path.is_file() {
            return FileOutcome::fail(path, FailureReason::NotAFileOrDirectory);
        }

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => return FileOutcome::fail(path, FailureReason::ReadError(e.to_string())),
        };
        let source = String::from_utf8_lossy(&bytes);

        match self.parser.parse(&source, path) {
            Ok(tree) => self.checker.check(&tree, path),
            Err(e) => FileOutcome::fail(path, FailureReason::ParseError(e.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
