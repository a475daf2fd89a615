//! Tests for error construction and reporting.

use super::*;
use rstest::rstest;

fn spec_key() -> KeyName {
    KeyName::parse("spec/sw/app/level").expect("valid key name")
}

#[rstest]
#[case(
    OptsError::illegal_spec(&spec_key(), SpecViolation::ReservedShortOption),
    ErrorKind::IllegalSpecification
)]
#[case(OptsError::unknown_option("--bogus"), ErrorKind::UnknownOption)]
#[case(
    OptsError::illegal_use("-v", UsageViolation::NotRepeatable),
    ErrorKind::IllegalUse
)]
fn classifies_errors(#[case] err: OptsError, #[case] kind: ErrorKind) {
    assert_eq!(err.kind(), kind);
}

#[test]
fn messages_name_the_offender() {
    let err = OptsError::illegal_spec(
        &spec_key(),
        SpecViolation::DuplicateOption {
            option: "-l".to_owned(),
            existing: "spec/sw/app/other".to_owned(),
        },
    );
    assert_eq!(
        err.to_string(),
        "Illegal specification on key 'spec/sw/app/level': the option '-l' has already been \
         specified for the key 'spec/sw/app/other'."
    );

    let conflict = OptsError::illegal_use(
        "--level",
        UsageViolation::ConflictingSource {
            other: "--verbosity".to_owned(),
            key: "spec/sw/app/level".to_owned(),
        },
    );
    let text = conflict.to_string();
    assert!(text.contains("--level"), "missing option in {text}");
    assert!(text.contains("--verbosity"), "missing other option in {text}");
    assert!(text.contains("spec/sw/app/level"), "missing key in {text}");
}

#[test]
fn attach_writes_kind_and_reason() {
    let mut error_key = Key::new("/sw/app").expect("valid key name");
    OptsError::unknown_option("--bogus").attach_to(&mut error_key);
    assert_eq!(error_key.meta(ERROR_META), Some("unknown-option"));
    assert_eq!(
        error_key.meta(ERROR_REASON_META),
        Some("Unknown option: --bogus.")
    );
}
