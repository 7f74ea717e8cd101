use crate::{CliClientResult, ClientError};

use um_core::{CreateUserRequest, User, UserId};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the um-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:5000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        self.client.request(method, &url)
    }

    /// Execute request, turning the server's error envelope into `ClientError::Api`
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> CliClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// List all users. The server's "no users found" 404 is an empty list.
    pub async fn list_users(&self) -> CliClientResult<Vec<User>> {
        let req = self.request(Method::GET, "/api/users");
        match self.execute(req).await {
            Err(e) if e.status() == Some(StatusCode::NOT_FOUND.as_u16()) => Ok(Vec::new()),
            other => other,
        }
    }

    /// Create a user and return the stored row
    pub async fn create_user(&self, user: &CreateUserRequest) -> CliClientResult<User> {
        let req = self.request(Method::POST, "/api/users").json(user);
        self.execute(req).await
    }

    /// Set the age of a user and return the updated row(s)
    pub async fn update_user_age(&self, id: UserId, age: i32) -> CliClientResult<Vec<User>> {
        #[derive(Serialize)]
        struct UpdateRequest {
            age: i32,
        }

        let req = self
            .request(Method::PUT, &format!("/api/users/{}", id))
            .json(&UpdateRequest { age });
        self.execute(req).await
    }

    /// Delete a user and return the deleted row(s)
    pub async fn delete_user(&self, id: UserId) -> CliClientResult<Vec<User>> {
        let req = self.request(Method::DELETE, &format!("/api/users/{}", id));
        self.execute(req).await
    }
}

/// Read `{"error": {"code", "message"}}`, falling back to the raw body.
#[track_caller]
fn api_error(status: StatusCode, body: &str) -> ClientError {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let error = parsed.as_ref().and_then(|v| v.get("error"));

    let code = error
        .and_then(|e| e.get("code"))
        .and_then(|v| v.as_str())
        .unwrap_or("UNKNOWN")
        .to_string();
    let message = error
        .and_then(|e| e.get("message"))
        .and_then(|v| v.as_str())
        .map(String::from)
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                status.to_string()
            } else {
                trimmed.to_string()
            }
        });

    ClientError::Api {
        status: status.as_u16(),
        code,
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}
