mod client_config;
mod config;
mod cors_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod supabase_config;

#[cfg(test)]
mod tests;

pub use client_config::ClientConfig;
pub use config::Config;
pub use cors_config::CorsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use supabase_config::SupabaseConfig;

const CONFIG_DIR_ENV: &str = "UM_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".um";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;

const DEFAULT_TABLE: &str = "users";
const DEFAULT_SUPABASE_TIMEOUT_SECS: u64 = 10;
const MIN_SUPABASE_TIMEOUT_SECS: u64 = 1;
const MAX_SUPABASE_TIMEOUT_SECS: u64 = 300;

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
