use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use breakit_core::{llm::CompletionError, model::ValidationError};

/// Failures of the HTTP layer. Every variant answers with a plain-text body.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing problem")]
    MissingProblem,
    #[error("{0}")]
    InvalidInput(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
    /// Non-success answer from the completion service, passed through as-is.
    #[error("{body}")]
    Upstream { status: u16, body: String },
    #[error("{0}")]
    Internal(String),
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::MissingProblem => Error::MissingProblem,
            other => Error::InvalidInput(other.to_string()),
        }
    }
}

impl From<CompletionError> for Error {
    fn from(e: CompletionError) -> Self {
        match e {
            CompletionError::Upstream { status, body } => Error::Upstream { status, body },
            other => Error::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::MissingProblem | Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Error::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}
