mod locator;
mod outcome;
mod rollback;

pub use locator::{MethodDeclaration, MethodLocator};
pub use outcome::{FailureReason, FileOutcome, ValidationOutcome};
pub use rollback::RollbackRuleChecker;

use std::path::Path;

use crate::syntax::SyntaxTree;

/// Validates one parsed migration.
pub trait Checker {
    fn check(&self, tree: &SyntaxTree, path: &Path) -> FileOutcome;
}

/// Locates the rollback method and applies the rollback rule to it.
#[derive(Debug, Clone)]
pub struct MigrationChecker {
    locator: MethodLocator,
    rule: RollbackRuleChecker,
}

impl MigrationChecker {
    #[must_use]
    pub fn new(method_name: impl Into<String>) -> Self {
        Self {
            locator: MethodLocator::new(method_name),
            rule: RollbackRuleChecker::new(),
        }
    }

    #[must_use]
    pub fn method_name(&self) -> &str {
        self.locator.method_name()
    }
}

impl Checker for MigrationChecker {
    fn check(&self, tree: &SyntaxTree, path: &Path) -> FileOutcome {
        let method = self.locator.locate(tree);
        if let Some(method) = &method {
            tracing::trace!(
                path = %path.display(),
                method = method.name(),
                line = method.line(),
                statements = method.body_statements().len(),
                "rollback method found"
            );
        }
        self.rule.check(method.as_ref(), path)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
