use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SUPABASE_TIMEOUT_SECS, DEFAULT_TABLE,
    MAX_SUPABASE_TIMEOUT_SECS, MIN_SUPABASE_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Hosted database connection settings.
///
/// `url` and `service_key` normally come from `SUPABASE_URL` and
/// `SUPABASE_SERVICE_KEY`; the server refuses to start without them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SupabaseConfig {
    pub url: Option<String>,
    pub service_key: Option<String>,
    pub table: String,
    pub timeout_secs: u64,
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            service_key: None,
            table: String::from(DEFAULT_TABLE),
            timeout_secs: DEFAULT_SUPABASE_TIMEOUT_SECS,
        }
    }
}

impl SupabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let (url, _) = self.credentials()?;

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::supabase(format!(
                "SUPABASE_URL must start with http:// or https://, got {url}"
            )));
        }

        if self.table.trim().is_empty() {
            return Err(ConfigError::supabase("supabase.table cannot be empty"));
        }

        if !(MIN_SUPABASE_TIMEOUT_SECS..=MAX_SUPABASE_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::supabase(format!(
                "supabase.timeout_secs must be {}-{}, got {}",
                MIN_SUPABASE_TIMEOUT_SECS, MAX_SUPABASE_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    /// Project URL and service key, or an error naming what is missing.
    #[track_caller]
    pub fn credentials(&self) -> ConfigErrorResult<(&str, &str)> {
        let url = non_blank(self.url.as_deref());
        let key = non_blank(self.service_key.as_deref());

        match (url, key) {
            (Some(url), Some(key)) => Ok((url, key)),
            _ => Err(ConfigError::supabase(
                "Supabase credentials are not defined: set SUPABASE_URL and SUPABASE_SERVICE_KEY",
            )),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
