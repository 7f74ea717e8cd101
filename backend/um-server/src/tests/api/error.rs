use crate::ApiError;

use um_core::CoreError;
use um_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = body_json(ApiError::not_found("No users found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "No users found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Age is required to update.".into(),
        field: Some("age".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "age");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let (status, json) = body_json(ApiError::bad_request("Failed to insert user")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert_eq!(json["error"]["message"], "Failed to insert user");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_db_error_converts_to_internal_without_detail() {
    let db_error = DbError::Initialization {
        message: "secret connection detail".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = db_error.into();
    assert!(matches!(api_error, ApiError::Internal { .. }));

    let (status, json) = body_json(api_error).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Database operation failed");
}

#[test]
fn test_core_validation_converts_to_validation_with_field() {
    let core_error = CoreError::validation("Name, email, and age are required.", Some("email"));

    let api_error: ApiError = core_error.into();

    match api_error {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "Name, email, and age are required.");
            assert_eq!(field.as_deref(), Some("email"));
        }
        other => panic!("Expected Validation, got {other:?}"),
    }
}
