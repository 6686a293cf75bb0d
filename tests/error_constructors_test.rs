use hestia::error::HestiaError;

#[test]
fn error_constructors_group_1() {
    assert!(matches!(
        HestiaError::config("x"),
        HestiaError::Config { .. }
    ));
    assert!(matches!(
        HestiaError::group_not_found("1.1"),
        HestiaError::GroupNotFound { .. }
    ));
    assert!(matches!(
        HestiaError::schedule_unavailable("x"),
        HestiaError::ScheduleUnavailable { .. }
    ));
    assert!(matches!(
        HestiaError::command_failed("x"),
        HestiaError::CommandFailed { .. }
    ));
}

#[test]
fn error_constructors_group_2() {
    let ser = HestiaError::Serialization {
        message: "s".into(),
    };
    assert!(matches!(ser, HestiaError::Serialization { .. }));
    assert!(matches!(HestiaError::io("x"), HestiaError::Io { .. }));
    assert!(matches!(
        HestiaError::network("x"),
        HestiaError::Network { .. }
    ));
    assert!(matches!(
        HestiaError::validation("f", "m"),
        HestiaError::Validation { .. }
    ));
    assert!(matches!(
        HestiaError::timeout("x"),
        HestiaError::Timeout { .. }
    ));
    assert!(matches!(
        HestiaError::generic("x"),
        HestiaError::Generic { .. }
    ));
}

#[test]
fn display_messages() {
    let e = HestiaError::validation("field", "bad");
    let s = format!("{}", e);
    assert!(s.contains("Validation error"));

    let e = HestiaError::group_not_found("6.2");
    assert!(format!("{}", e).contains("6.2"));
}
