use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failures while resolving a topic against the encyclopedia provider.
/// Callers see every variant the same way: status 500 with a plain-text
/// body carrying the underlying message.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("page not found: {0}")]
    PageNotFound(String),

    #[error("no summary available for \"{0}\"")]
    SummaryUnavailable(String),

    #[error("wikipedia request failed: {0}")]
    Transport(String),
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("lookup error: {}", self),
        )
            .into_response()
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
