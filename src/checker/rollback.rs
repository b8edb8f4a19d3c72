use std::path::Path;

use super::locator::MethodDeclaration;
use super::outcome::{FailureReason, FileOutcome};

/// Applies the irreversible-rollback rule: the rollback method must consist of
/// exactly one statement, and that statement must be a throw.
///
/// The thrown value is never inspected.
#[derive(Debug, Clone, Copy, Default)]
pub struct RollbackRuleChecker;

impl RollbackRuleChecker {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn check(&self, method: Option<&MethodDeclaration<'_>>, path: &Path) -> FileOutcome {
        match Self::classify(method) {
            None => FileOutcome::pass(path),
            Some(reason) => FileOutcome::fail(path, reason),
        }
    }

    fn classify(method: Option<&MethodDeclaration<'_>>) -> Option<FailureReason> {
        let Some(method) = method else {
            return Some(FailureReason::MissingRollbackMethod);
        };

        match method.body_statements() {
            [] => Some(FailureReason::EmptyRollbackBody),
            [statement] if statement.is_throw() => None,
            _ => Some(FailureReason::RollbackBodyNotSoleThrow),
        }
    }
}

#[cfg(test)]
#[path = "rollback_tests.rs"]
mod tests;
