use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeagueApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid request parameter: {0}")]
    InvalidParameter(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request failed with status {status}: {message}")]
    RequestError { status: u16, message: String },

    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Failed processing property {field} of {class}")]
    SchemaError { field: String, class: String },

    #[error("{property} not found on {class}")]
    UnresolvedLink {
        property: String,
        class: &'static str,
    },

    #[error("Static data error: {0}")]
    StaticDataError(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}

pub type ApiResult<T> = Result<T, LeagueApiError>;
