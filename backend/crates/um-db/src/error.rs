use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("HTTP transport error: {source} {location}")]
    Http {
        source: reqwest::Error,
        location: ErrorLocation,
    },

    /// The hosted database answered with a non-success status
    #[error("Database API error (status {status}): {message} {location}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to decode database response: {source} {location}")]
    Decode {
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Database client initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for DbError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for DbError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Decode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
