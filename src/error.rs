//! Error types for the library server

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{api::envelope::Envelope, repository::StoreError};

/// Main application error type.
///
/// Every variant is terminal for the request that raised it and maps to a
/// single status code and envelope message.
#[derive(Error, Debug)]
pub enum AppError {
    /// The entity's collection handle was never wired up
    #[error("collection not connected")]
    StoreUnavailable,

    /// The path identifier is not a valid ObjectId
    #[error("invalid id")]
    InvalidIdentifier,

    /// The request body could not be decoded; the detail is only logged
    #[error("invalid input")]
    InvalidInput(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Any store failure; its text is passed through to the client as-is
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::StoreUnavailable | AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidIdentifier | AppError::InvalidInput(_) | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Store(e) => tracing::error!("Store error: {:?}", e),
            AppError::InvalidInput(detail) => tracing::debug!("Rejected request body: {}", detail),
            _ => {}
        }

        Envelope::<()>::new(self.status(), self.to_string(), None).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
