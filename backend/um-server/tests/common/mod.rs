#![allow(dead_code)]

//! Test infrastructure for um-server API tests

use um_config::CorsConfig;
use um_core::{AgePatch, NewUser, User, UserId};
use um_db::{DbError, Result as DbErrorResult, UserRepository};
use um_server::{AppState, build_router};

use std::panic::Location;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// In-memory stand-in for the users table. Ids are assigned from 1 upwards.
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<User>>,
    next_id: Mutex<UserId>,
}

impl InMemoryUserRepository {
    pub fn snapshot(&self) -> Vec<User> {
        self.rows.lock().unwrap().clone()
    }

    pub fn seed(&self, name: &str, email: &str, age: i32) -> User {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let user = User {
            id: *next_id,
            name: name.to_string(),
            email: email.to_string(),
            age,
        };
        self.rows.lock().unwrap().push(user.clone());
        user
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        Ok(self.snapshot())
    }

    async fn create(&self, user: &NewUser) -> DbErrorResult<Vec<User>> {
        Ok(vec![self.seed(&user.name, &user.email, user.age)])
    }

    async fn update_age(&self, id: UserId, patch: &AgePatch) -> DbErrorResult<Vec<User>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows
            .iter_mut()
            .filter(|u| u.id == id)
            .map(|u| {
                u.age = patch.age;
                u.clone()
            })
            .collect())
    }

    async fn delete(&self, id: UserId) -> DbErrorResult<Vec<User>> {
        let mut rows = self.rows.lock().unwrap();
        let (deleted, kept): (Vec<User>, Vec<User>) = rows.drain(..).partition(|u| u.id == id);
        *rows = kept;
        Ok(deleted)
    }
}

/// Repository whose every call fails, as if the database were unreachable.
pub struct FailingUserRepository;

impl FailingUserRepository {
    fn error() -> DbError {
        DbError::Api {
            status: 503,
            code: None,
            message: "upstream unavailable".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        Err(Self::error())
    }

    async fn create(&self, _user: &NewUser) -> DbErrorResult<Vec<User>> {
        Err(Self::error())
    }

    async fn update_age(&self, _id: UserId, _patch: &AgePatch) -> DbErrorResult<Vec<User>> {
        Err(Self::error())
    }

    async fn delete(&self, _id: UserId) -> DbErrorResult<Vec<User>> {
        Err(Self::error())
    }
}

/// Insert always "succeeds" with no rows, as when row-level policies hide the new row.
pub struct EmptyInsertRepository;

#[async_trait]
impl UserRepository for EmptyInsertRepository {
    async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        Ok(Vec::new())
    }

    async fn create(&self, _user: &NewUser) -> DbErrorResult<Vec<User>> {
        Ok(Vec::new())
    }

    async fn update_age(&self, _id: UserId, _patch: &AgePatch) -> DbErrorResult<Vec<User>> {
        Ok(Vec::new())
    }

    async fn delete(&self, _id: UserId) -> DbErrorResult<Vec<User>> {
        Ok(Vec::new())
    }
}

/// Router over the given repository with the default CORS policy
pub fn create_test_app(repo: Arc<dyn UserRepository>) -> Router {
    build_router(AppState::new(repo), &CorsConfig::default()).expect("Failed to build router")
}

/// Router over a fresh in-memory repository, plus a handle on that repository
pub fn create_in_memory_app() -> (Router, Arc<InMemoryUserRepository>) {
    let repo = Arc::new(InMemoryUserRepository::default());
    (create_test_app(repo.clone()), repo)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send one request and decode the JSON response body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response: Response<Body> = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}
