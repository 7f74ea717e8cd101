use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from talking to the um-server API
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never got a response (connection refused, timeout, ...)
    #[error("Request to server failed: {source} {location}")]
    Transport {
        source: reqwest::Error,
        location: ErrorLocation,
    },

    /// The server answered with its error envelope
    #[error("Server returned {status} {code}: {message} {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected response body: {source} {location}")]
    Decode {
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// HTTP status of an API error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Transport {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Decode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
