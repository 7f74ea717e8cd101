use crate::User;

#[test]
fn test_user_deserializes_from_row() {
    let user: User =
        serde_json::from_str(r#"{"id":7,"name":"Ada","email":"ada@x.com","age":36}"#).unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@x.com");
    assert_eq!(user.age, 36);
}

#[test]
fn test_user_ignores_extra_columns() {
    let user: User = serde_json::from_str(
        r#"{"id":1,"name":"A","email":"a@x.com","age":30,"created_at":"2024-01-01T00:00:00Z"}"#,
    )
    .unwrap();

    assert_eq!(user.id, 1);
}

#[test]
fn test_user_missing_column_is_rejected() {
    let result: Result<User, _> = serde_json::from_str(r#"{"id":1,"name":"A","age":30}"#);
    assert!(result.is_err());
}
