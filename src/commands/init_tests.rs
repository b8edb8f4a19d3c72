use std::fs;

use tempfile::TempDir;

use super::*;
use crate::config::{Config, parse_config};

#[test]
fn template_parses_to_defaults() {
    let config = parse_config(&generate_config_template()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn template_documents_every_key() {
    let template = generate_config_template();
    for key in ["[check]", "method", "suffix", "exclude", "parallel", "show_example"] {
        assert!(template.contains(key), "template is missing {key}");
    }
}

#[test]
fn init_writes_new_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join(".rollback-guard.toml");
    let args = InitArgs {
        output: output.clone(),
        force: false,
    };

    run_init_impl(&args).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), generate_config_template());
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("config.toml");
    fs::write(&output, "# mine").unwrap();
    let args = InitArgs {
        output: output.clone(),
        force: false,
    };

    let result = run_init_impl(&args);

    assert!(matches!(result, Err(RollbackGuardError::Config(_))));
    assert_eq!(run_init(&args), EXIT_FAILURE);
    assert_eq!(fs::read_to_string(&output).unwrap(), "# mine");
}

#[test]
fn init_force_overwrites() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("config.toml");
    fs::write(&output, "# mine").unwrap();
    let args = InitArgs {
        output: output.clone(),
        force: true,
    };

    assert_eq!(run_init(&args), EXIT_SUCCESS);
    assert!(fs::read_to_string(&output).unwrap().contains("[check]"));
}
