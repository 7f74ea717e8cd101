use crate::{AgeInput, CoreError, CreateUserRequest, NewUser};

use googletest::prelude::*;

fn request(name: Option<&str>, email: Option<&str>, age: Option<AgeInput>) -> CreateUserRequest {
    CreateUserRequest {
        name: name.map(String::from),
        email: email.map(String::from),
        age,
    }
}

fn missing_field(req: CreateUserRequest) -> Option<String> {
    match req.into_new_user() {
        Err(CoreError::Validation { field, .. }) => field,
        Ok(user) => panic!("expected validation error, got {user:?}"),
    }
}

#[test]
fn given_all_fields_when_into_new_user_then_ok() {
    let req = request(Some("A"), Some("a@x.com"), Some(AgeInput::Number(30)));

    let user = req.into_new_user().unwrap();

    assert_eq!(
        user,
        NewUser {
            name: "A".into(),
            email: "a@x.com".into(),
            age: 30,
        }
    );
}

#[test]
fn given_form_body_with_string_age_when_deserialized_then_ok() {
    let req: CreateUserRequest =
        serde_json::from_str(r#"{"name":"A","email":"a@x.com","age":"30"}"#).unwrap();

    let user = req.into_new_user().unwrap();

    assert_that!(user.age, eq(30));
}

#[test]
fn given_missing_name_when_into_new_user_then_field_is_name() {
    let req = request(None, Some("a@x.com"), Some(AgeInput::Number(30)));
    assert_eq!(missing_field(req).as_deref(), Some("name"));
}

#[test]
fn given_blank_email_when_into_new_user_then_field_is_email() {
    let req = request(Some("A"), Some("  "), Some(AgeInput::Number(30)));
    assert_eq!(missing_field(req).as_deref(), Some("email"));
}

#[test]
fn given_missing_age_when_into_new_user_then_field_is_age() {
    let req = request(Some("A"), Some("a@x.com"), None);
    assert_eq!(missing_field(req).as_deref(), Some("age"));
}

#[test]
fn given_empty_body_when_deserialized_then_all_fields_absent() {
    let req: CreateUserRequest = serde_json::from_str("{}").unwrap();

    assert!(req.name.is_none());
    assert!(req.email.is_none());
    assert!(req.age.is_none());
    assert_eq!(missing_field(req).as_deref(), Some("name"));
}

#[test]
fn given_new_user_when_serialized_then_only_writable_columns() {
    let user = NewUser {
        name: "A".into(),
        email: "a@x.com".into(),
        age: 30,
    };

    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json, serde_json::json!({"name": "A", "email": "a@x.com", "age": 30}));
}

#[test]
fn given_zero_age_when_into_new_user_then_field_is_age() {
    let req = request(Some("A"), Some("a@x.com"), Some(AgeInput::Number(0)));
    assert_eq!(missing_field(req).as_deref(), Some("age"));
}

#[test]
fn given_zero_string_age_when_into_new_user_then_field_is_age() {
    let req = request(Some("A"), Some("a@x.com"), Some(AgeInput::Text("0".into())));
    assert_eq!(missing_field(req).as_deref(), Some("age"));
}
