use fhub_derive::fhub_error;
use std::borrow::Cow;

#[fhub_error]
pub enum SampleError {
    #[error("Parse failure{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal failure{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<i32, SampleError> {
    Ok(raw.parse::<i32>()?)
}

#[test]
fn fhub_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/fhub_error_pass.rs");
    t.pass("tests/ui/fhub_error_existing_derive.rs");
}

#[test]
fn source_errors_convert_through_question_mark() {
    let err = parse("twelve").unwrap_err();
    assert_eq!(err.kind(), "Parse");
    assert!(err.to_string().starts_with("Parse failure: "));
}

#[test]
fn context_is_rendered_in_display() {
    let err = "x".parse::<i32>().context("Reading the step").unwrap_err();
    assert!(matches!(err, SampleError::Parse { .. }));
    assert!(err.to_string().starts_with("Parse failure (Reading the step): "));

    let rejected: Result<(), SampleError> =
        Err(SampleError::Rejected { message: "nope".into(), context: None });
    let err = rejected.context("Second pass").unwrap_err();
    assert_eq!(err.to_string(), "Rejected (Second pass): nope");
}

#[test]
fn strings_fall_back_to_internal() {
    let err = SampleError::from(String::from("unexpected"));
    assert_eq!(err.kind(), "Internal");
    assert_eq!(err.to_string(), "Internal failure: unexpected");
}
