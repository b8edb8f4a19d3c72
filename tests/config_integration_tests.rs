//! Integration tests for the `config` subcommands.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn config_validate_accepts_valid_file() {
    let fixture = TestFixture::new();
    fixture.create_config("[check]\nmethod = \"down\"\nexclude = [\"**/seeds/*\"]\n");

    rollback_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_missing_file() {
    let fixture = TestFixture::new();

    rollback_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn config_validate_rejects_invalid_method() {
    let fixture = TestFixture::new();
    fixture.create_config("[check]\nmethod = \"2down\"\n");

    rollback_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a valid method name"));
}

#[test]
fn config_validate_rejects_unknown_key() {
    let fixture = TestFixture::new();
    fixture.create_file("custom.toml", "[check]\nmax_lines = 500\n");

    rollback_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate", "--config", "custom.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("max_lines"));
}

#[test]
fn config_show_defaults_without_file() {
    let fixture = TestFixture::new();

    rollback_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Source: built-in defaults"))
        .stdout(predicate::str::contains("method = \"down\""))
        .stdout(predicate::str::contains("suffix = \".php\""));
}

#[test]
fn config_show_json_from_local_file() {
    let fixture = TestFixture::new();
    fixture.create_config("[check]\nmethod = \"rollback\"\n");

    let output = rollback_guard!()
        .current_dir(fixture.path())
        .args(["config", "show", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["check"]["method"], "rollback");
    assert_eq!(json["check"]["suffix"], ".php");
}
