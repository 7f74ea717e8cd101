//! User REST API handlers
//!
//! Each handler is a single pass-through to the repository. The row arrays
//! returned by the database are sent back as-is.

use crate::{ApiError, ApiResult, AppState};

use um_core::{CreateUserRequest, UpdateUserRequest, User, UserId};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use log::info;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/users
///
/// List all users. An empty table is reported as 404.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = state.users.find_all().await?;

    if users.is_empty() {
        return Err(ApiError::not_found("No users found"));
    }

    Ok(Json(users))
}

/// POST /api/users
///
/// Create a user. Name, email and age must all be present.
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let new_user = req.into_new_user()?;

    let created = state
        .users
        .create(&new_user)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::bad_request("Failed to insert user"))?;

    info!("Created user {} ({})", created.id, created.email);

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/users/:id
///
/// Update the age of one user.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<Vec<User>>> {
    let user_id = parse_user_id(&id)?;
    let patch = req.into_patch()?;

    let updated = state.users.update_age(user_id, &patch).await?;
    if updated.is_empty() {
        return Err(not_found(user_id));
    }

    info!("Updated age of user {} to {}", user_id, patch.age);

    Ok(Json(updated))
}

/// DELETE /api/users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<User>>> {
    let user_id = parse_user_id(&id)?;

    let deleted = state.users.delete(user_id).await?;
    if deleted.is_empty() {
        return Err(not_found(user_id));
    }

    info!("Deleted user {}", user_id);

    Ok(Json(deleted))
}

// =============================================================================
// Helpers
// =============================================================================

/// Parse the `:id` path segment.
#[track_caller]
pub fn parse_user_id(raw: &str) -> ApiResult<UserId> {
    raw.trim()
        .parse::<UserId>()
        .map_err(|_| ApiError::Validation {
            message: format!("Invalid user id: {raw}"),
            field: Some("id".into()),
            location: ErrorLocation::from(Location::caller()),
        })
}

#[track_caller]
fn not_found(id: UserId) -> ApiError {
    ApiError::not_found(format!("User {id} not found"))
}
