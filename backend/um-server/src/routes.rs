use crate::{
    AppState, ServerError, ServerResult, create_user, delete_user, health, list_users,
    request_logging, update_user,
};

use um_config::CorsConfig;

use std::panic::Location;

use axum::{
    Router, middleware,
    routing::{get, put},
};
use error_location::ErrorLocation;
use http::{HeaderValue, Method, header};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

/// Build the application router with all endpoints
pub fn build_router(state: AppState, cors: &CorsConfig) -> ServerResult<Router> {
    let cors = cors_layer(cors)?;

    Ok(Router::new()
        // User endpoints
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}", put(update_user).delete(delete_user))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // Logging wraps CORS so preflight requests are logged too
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_logging::log_requests))
                .layer(cors),
        ))
}

/// CORS policy: one exact origin, the four user methods, JSON bodies.
#[track_caller]
pub fn cors_layer(config: &CorsConfig) -> ServerResult<CorsLayer> {
    let origin = config.allowed_origin.trim();
    let origin = HeaderValue::from_str(origin).map_err(|_| ServerError::CorsOrigin {
        origin: origin.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(config.allow_credentials))
}
