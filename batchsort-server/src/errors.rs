use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use tokio::task::JoinError;

use batchsort_core::SortError;

use crate::api::PayloadError;

pub type AppResult<T> = Result<T, AppError>;

/// Message returned for any body that does not decode into a sort request.
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid JSON payload";

/// Caller-visible failure, rendered as a plain-text body.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl From<PayloadError> for AppError {
    fn from(err: PayloadError) -> Self {
        tracing::warn!(error = %err, "rejecting malformed sort request");
        Self::bad_request(INVALID_PAYLOAD_MESSAGE)
    }
}

impl From<SortError> for AppError {
    fn from(err: SortError) -> Self {
        tracing::error!(error = %err, "batch aborted");
        Self::internal(err.to_string())
    }
}

impl From<JoinError> for AppError {
    fn from(err: JoinError) -> Self {
        tracing::error!(error = ?err, "sort task did not complete");
        Self::internal("Sort task failed")
    }
}
