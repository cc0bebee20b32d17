use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

/// Error surface shared by both task APIs.
///
/// Every failure is terminal for the current request and leaves store state
/// unchanged; there is no transient/permanent distinction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Task not Found!")]
    NotFound,
    #[error("{0}")]
    InvalidInput(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, self.to_string()).into_response()
    }
}
