use crate::{ConfigError, ConfigErrorResult, DEFAULT_CORS_ORIGIN};

use serde::Deserialize;

/// Cross-origin policy for the browser front end.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// The single origin allowed to call the API
    pub allowed_origin: String,
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: String::from(DEFAULT_CORS_ORIGIN),
            allow_credentials: true,
        }
    }
}

impl CorsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let origin = self.allowed_origin.trim();

        if origin == "*" {
            return Err(ConfigError::cors(
                "cors.allowed_origin must be a concrete origin, not '*'",
            ));
        }

        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(ConfigError::cors(format!(
                "cors.allowed_origin must start with http:// or https://, got '{origin}'"
            )));
        }

        if origin.ends_with('/') {
            return Err(ConfigError::cors(format!(
                "cors.allowed_origin must not end with '/', got '{origin}'"
            )));
        }

        Ok(())
    }
}
