use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] um_config::ConfigError),

    #[error("Database client error: {0}")]
    Database(#[from] um_db::DbError),

    #[error("Invalid CORS origin '{origin}' {location}")]
    CorsOrigin {
        origin: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
