#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the rollback-guard binary.
#[macro_export]
macro_rules! rollback_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("rollback-guard"))
    };
}

/// Creates a temporary directory with migration fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn create_dir(&self, relative_path: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".rollback-guard.toml", content);
    }

    /// Migration whose `down` method has the given body.
    pub fn create_migration(&self, relative_path: &str, down_body: &str) -> PathBuf {
        let content = format!(
            "<?php\n\nclass Migration\n{{\n    public function up(): void\n    {{\n        $this->execute('SELECT 1');\n    }}\n\n    public function down(): void\n    {{\n{down_body}\n    }}\n}}\n"
        );
        self.create_file(relative_path, &content)
    }

    pub fn create_irreversible(&self, relative_path: &str) -> PathBuf {
        self.create_migration(relative_path, IRREVERSIBLE_BODY)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

pub const IRREVERSIBLE_BODY: &str =
    "        throw new \\Exception('This migration is irreversible and cannot be reverted.');";

pub const REVERSIBLE_BODY: &str = "        $this->execute('DROP TABLE users');";

pub const THROW_AFTER_WORK_BODY: &str =
    "        $this->execute('DROP TABLE users');\n        throw new \\Exception('too late');";

pub const MIGRATION_WITHOUT_DOWN: &str =
    "<?php\n\nclass Migration\n{\n    public function up(): void\n    {\n    }\n}\n";
