use std::path::PathBuf;

use serde_json::Value;

use super::*;
use crate::checker::FailureReason;
use crate::runner::RunAbort;

fn parse(report: &RunReport) -> Value {
    let text = JsonFormatter.format(report).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn summary_and_results() {
    let report = RunReport::completed(
        vec![PathBuf::from("db")],
        "down",
        vec![
            FileOutcome::pass("db/001.php"),
            FileOutcome::fail("db/002.php", FailureReason::RollbackBodyNotSoleThrow),
        ],
    );

    let json = parse(&report);

    assert_eq!(json["summary"]["files_analyzed"], 2);
    assert_eq!(json["summary"]["errors_count"], 1);
    assert_eq!(json["summary"]["exit_code"], 1);
    assert_eq!(json["method"], "down");
    assert_eq!(json["searched_paths"][0], "db");
    assert_eq!(json["results"][0]["status"], "passed");
    assert!(json["results"][0].get("reason").is_none());
    assert_eq!(json["results"][1]["status"], "failed");
    assert_eq!(
        json["results"][1]["reason"],
        "rollback_body_not_sole_throw"
    );
    assert!(json.get("error").is_none());
}

#[test]
fn failure_message_matches_text_output() {
    let report = RunReport::completed(
        vec![],
        "down",
        vec![FileOutcome::fail(
            "m.php",
            FailureReason::MissingRollbackMethod,
        )],
    );

    let json = parse(&report);

    assert_eq!(
        json["results"][0]["message"],
        "Migration `m.php` missing `down` method"
    );
}

#[test]
fn aborted_run_has_error() {
    let report = RunReport::aborted(
        vec![PathBuf::from("missing")],
        "down",
        RunAbort::PathNotFound(PathBuf::from("missing")),
    );

    let json = parse(&report);

    assert_eq!(
        json["error"],
        "Migration path `missing` is not a directory or file"
    );
    assert_eq!(json["summary"]["files_analyzed"], 0);
    assert_eq!(json["results"].as_array().unwrap().len(), 0);
}

#[test]
fn output_ends_with_newline() {
    let report = RunReport::completed(vec![], "down", vec![FileOutcome::pass("a.php")]);

    let text = JsonFormatter.format(&report).unwrap();

    assert!(text.ends_with("}\n"));
}
