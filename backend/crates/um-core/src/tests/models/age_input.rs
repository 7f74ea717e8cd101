use crate::{AgeInput, CoreError};

use googletest::prelude::*;

#[test]
fn given_number_when_resolve_then_some_age() {
    let input: AgeInput = serde_json::from_str("30").unwrap();
    assert_that!(input.resolve().unwrap(), some(eq(30)));
}

#[test]
fn given_numeric_string_when_resolve_then_some_age() {
    let input: AgeInput = serde_json::from_str(r#"" 42 ""#).unwrap();
    assert_that!(input.resolve().unwrap(), some(eq(42)));
}

#[test]
fn given_zero_when_resolve_then_parsed() {
    let input = AgeInput::Number(0);
    assert_that!(input.resolve().unwrap(), some(eq(0)));
}

#[test]
fn given_blank_string_when_resolve_then_none() {
    let input = AgeInput::Text("   ".into());
    assert_that!(input.resolve().unwrap(), none());
}

#[test]
fn given_non_numeric_string_when_resolve_then_validation_error_on_age() {
    let input = AgeInput::Text("thirty".into());

    match input.resolve() {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("age")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_number_beyond_i32_when_resolve_then_error() {
    let input = AgeInput::Number(i64::from(i32::MAX) + 1);
    assert_that!(input.resolve(), err(anything()));
}
