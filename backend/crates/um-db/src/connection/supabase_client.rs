//! Supabase REST client.
//!
//! Supabase exposes each table over PostgREST at `<project>/rest/v1/<table>`.
//! Every request carries the service key twice (as `apikey` and as a bearer
//! token). Writes ask for `Prefer: return=representation` so the affected rows
//! come back in the response body, which lets callers tell "no row matched"
//! apart from success.

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::debug;
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const REST_PATH: &str = "/rest/v1";
const PREFER_RETURN_ROWS: &str = "return=representation";

/// Handle to a Supabase project. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    rest_url: String,
    service_key: String,
    http: reqwest::Client,
}

impl SupabaseClient {
    /// Create a client for the project at `url` authenticated with `service_key`.
    #[track_caller]
    pub fn new(url: &str, service_key: &str, timeout: Duration) -> DbErrorResult<Self> {
        let url = url.trim().trim_end_matches('/');
        let service_key = service_key.trim();

        if url.is_empty() || service_key.is_empty() {
            return Err(DbError::Initialization {
                message: "Supabase URL and service key are required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Url::parse(url).map_err(|e| DbError::Initialization {
            message: format!("Invalid Supabase URL '{url}': {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DbError::Initialization {
                message: format!("Failed to build HTTP client: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            rest_url: format!("{url}{REST_PATH}"),
            service_key: service_key.to_string(),
            http,
        })
    }

    /// Base URL of the REST interface, e.g. `https://xyz.supabase.co/rest/v1`
    pub fn rest_url(&self) -> &str {
        &self.rest_url
    }

    /// Start an operation on `table`.
    pub fn from(&self, table: &str) -> TableQuery<'_> {
        TableQuery {
            client: self,
            table: table.to_string(),
        }
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
    }
}

/// Operations against one table. Every method returns the affected rows.
pub struct TableQuery<'a> {
    client: &'a SupabaseClient,
    table: String,
}

impl TableQuery<'_> {
    /// `GET /<table>?select=*`
    pub async fn select_all<T: DeserializeOwned>(&self) -> DbErrorResult<Vec<T>> {
        let url = self.url(&[("select", "*".to_string())])?;
        debug!("Supabase select * from {}", self.table);

        execute(self.client.request(Method::GET, url)).await
    }

    /// `POST /<table>` with `row` as the body.
    pub async fn insert<B, T>(&self, row: &B) -> DbErrorResult<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(&[])?;
        debug!("Supabase insert into {}", self.table);

        let req = self
            .client
            .request(Method::POST, url)
            .header("Prefer", PREFER_RETURN_ROWS)
            .json(row);
        execute(req).await
    }

    /// `PATCH /<table>?<column>=eq.<value>` with `patch` as the body.
    pub async fn update_eq<B, T>(
        &self,
        column: &str,
        value: impl ToString,
        patch: &B,
    ) -> DbErrorResult<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = value.to_string();
        let url = self.url(&[(column, format!("eq.{value}"))])?;
        debug!("Supabase update {} where {} = {}", self.table, column, value);

        let req = self
            .client
            .request(Method::PATCH, url)
            .header("Prefer", PREFER_RETURN_ROWS)
            .json(patch);
        execute(req).await
    }

    /// `DELETE /<table>?<column>=eq.<value>`
    pub async fn delete_eq<T: DeserializeOwned>(
        &self,
        column: &str,
        value: impl ToString,
    ) -> DbErrorResult<Vec<T>> {
        let value = value.to_string();
        let url = self.url(&[(column, format!("eq.{value}"))])?;
        debug!("Supabase delete from {} where {} = {}", self.table, column, value);

        let req = self
            .client
            .request(Method::DELETE, url)
            .header("Prefer", PREFER_RETURN_ROWS);
        execute(req).await
    }

    #[track_caller]
    fn url(&self, query: &[(&str, String)]) -> DbErrorResult<Url> {
        let raw = format!("{}/{}", self.client.rest_url, self.table);
        let mut url = Url::parse(&raw).map_err(|e| DbError::Initialization {
            message: format!("Invalid table URL '{raw}': {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }
}

/// Send the request and decode the returned rows.
///
/// An empty success body decodes to no rows.
async fn execute<T: DeserializeOwned>(req: RequestBuilder) -> DbErrorResult<Vec<T>> {
    let response = req.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(api_error(status.as_u16(), &body));
    }

    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str(&body)?)
}

/// Build an `Api` error from a PostgREST error body.
///
/// PostgREST answers `{"code", "message", "details", "hint"}`; the Supabase
/// gateway sometimes answers `{"message"}` or `{"msg"}` instead.
#[track_caller]
pub(crate) fn api_error(status: u16, body: &str) -> DbError {
    let parsed: Option<Value> = serde_json::from_str(body).ok();

    let code = parsed
        .as_ref()
        .and_then(|v| v.get("code"))
        .and_then(|c| match c {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });

    let message = parsed
        .as_ref()
        .and_then(|v| {
            ["message", "msg", "error"]
                .iter()
                .find_map(|key| v.get(*key).and_then(Value::as_str))
        })
        .map(String::from)
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                format!("HTTP {status}")
            } else {
                trimmed.to_string()
            }
        });

    DbError::Api {
        status,
        code,
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}
