use std::path::Path;

use super::*;

#[test]
fn messages_name_file_and_method() {
    let path = Path::new("migrations/001_init.php");

    assert_eq!(
        FailureReason::MissingRollbackMethod.message(path, "down"),
        "Migration `migrations/001_init.php` missing `down` method"
    );
    assert_eq!(
        FailureReason::EmptyRollbackBody.message(path, "down"),
        "Migration `migrations/001_init.php` does not have any statements, must throw Exception"
    );
    assert_eq!(
        FailureReason::RollbackBodyNotSoleThrow.message(path, "rollback"),
        "Migration `migrations/001_init.php` should throw an Exception in `rollback` method, nothing more"
    );
}

#[test]
fn parse_and_read_messages_embed_detail() {
    let path = Path::new("m.php");

    assert_eq!(
        FailureReason::ParseError("Syntax error, unexpected `}` on line 3".to_string())
            .message(path, "down"),
        "Migration `m.php` parse error: Syntax error, unexpected `}` on line 3"
    );
    assert_eq!(
        FailureReason::ReadError("permission denied".to_string()).message(path, "down"),
        "Migration `m.php` could not be read: permission denied"
    );
    assert_eq!(
        FailureReason::NotAFileOrDirectory.message(path, "down"),
        "Migration `m.php` is not a file"
    );
}

#[test]
fn codes_are_distinct() {
    let reasons = [
        FailureReason::NotAFileOrDirectory,
        FailureReason::ReadError(String::new()),
        FailureReason::ParseError(String::new()),
        FailureReason::MissingRollbackMethod,
        FailureReason::EmptyRollbackBody,
        FailureReason::RollbackBodyNotSoleThrow,
    ];

    let mut codes: Vec<_> = reasons.iter().map(FailureReason::code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), reasons.len());
}

#[test]
fn file_outcome_accessors() {
    let pass = FileOutcome::pass("a.php");
    let fail = FileOutcome::fail("b.php", FailureReason::EmptyRollbackBody);

    assert!(pass.is_pass());
    assert!(!pass.is_fail());
    assert_eq!(pass.reason(), None);

    assert!(fail.is_fail());
    assert_eq!(fail.reason(), Some(&FailureReason::EmptyRollbackBody));
}

#[test]
fn display_is_short_form() {
    assert_eq!(
        FailureReason::MissingRollbackMethod.to_string(),
        "missing rollback method"
    );
    assert_eq!(
        FailureReason::ParseError("bad".to_string()).to_string(),
        "parse error: bad"
    );
}
