use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use log::{info, warn};

/// Log method, path, status and latency of every request.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        warn!("{method} {path} -> {} ({elapsed_ms}ms)", status.as_u16());
    } else {
        info!("{method} {path} -> {} ({elapsed_ms}ms)", status.as_u16());
    }

    response
}
