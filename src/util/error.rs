use axum::{extract::rejection::JsonRejection, response::{IntoResponse, Response}, http::StatusCode};
use serde::Serialize;

use crate::repository::repository_error::RepositoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerErrorKind {
    NotFound,
    BadRequest,
    Internal,
    /// Request body refused by the extractor; carries its status.
    Rejected(StatusCode),
}

impl std::fmt::Display for HandlerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HandlerErrorKind::NotFound => "NotFound",
            HandlerErrorKind::BadRequest => "BadRequest",
            HandlerErrorKind::Internal => "Internal",
            HandlerErrorKind::Rejected(_) => "Rejected",
        };
        write!(f, "{}", s)
    }
}

/// Error response; clients only ever see `{ "message": ... }`.
#[derive(Debug, Serialize)]
pub struct HandlerError {
    #[serde(skip)]
    pub error: HandlerErrorKind,
    pub message: String,
}

impl HandlerError {
    pub fn not_found<T: Into<String>>(message: T) -> Self {
        HandlerError { error: HandlerErrorKind::NotFound, message: message.into() }
    }

    pub fn bad_request<T: Into<String>>(message: T) -> Self {
        HandlerError { error: HandlerErrorKind::BadRequest, message: message.into() }
    }

    pub fn internal<T: Into<String>>(message: T) -> Self {
        HandlerError { error: HandlerErrorKind::Internal, message: message.into() }
    }

    pub fn status(&self) -> StatusCode {
        match self.error {
            HandlerErrorKind::NotFound => StatusCode::NOT_FOUND,
            HandlerErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            HandlerErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            HandlerErrorKind::Rejected(status) => status,
        }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for HandlerError {}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, axum::Json(self)).into_response()
    }
}

impl From<ServiceError> for HandlerError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => HandlerError::not_found(msg),
            ServiceError::InvalidInput(msg) | ServiceError::InternalError(msg) => HandlerError::internal(msg),
        }
    }
}

/// Service-level failures. `Display` is the bare message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    InternalError(String),
}

impl From<JsonRejection> for HandlerError {
    fn from(rejection: JsonRejection) -> Self {
        HandlerError {
            error: HandlerErrorKind::Rejected(rejection.status()),
            message: rejection.body_text(),
        }
    }
}

// Allow conversion from RepositoryError to ServiceError
impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::ValidationError(msg) => ServiceError::InvalidInput(msg),
            RepositoryError::DatabaseError(msg)
            | RepositoryError::ConnectionError(msg)
            | RepositoryError::SerializationError(msg) => ServiceError::InternalError(msg),
        }
    }
}
