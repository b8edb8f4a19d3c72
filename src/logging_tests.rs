use super::*;

#[test]
fn verbosity_raises_level() {
    assert_eq!(default_directive(0), "warn");
    assert_eq!(default_directive(1), "debug");
    assert_eq!(default_directive(2), "trace");
    assert_eq!(default_directive(9), "trace");
}

#[test]
fn init_twice_does_not_panic() {
    init(0);
    init(2);
}
