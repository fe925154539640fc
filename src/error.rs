//! Error types for the reservation service.
//!
//! [`TheaterError`] covers the client-input failures raised by the
//! [`Theater`](crate::models::Theater) itself. [`ApiError`] is what handlers
//! return: it adds the admin access failure and maps everything onto an
//! HTTP status with a `{"error": "..."}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Domain-level failures. All of them are expected, user-facing outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TheaterError {
    /// A required field is absent or the body could not be decoded.
    #[error("Wrong body format")]
    MalformedRequest,

    /// Row or column lies outside the configured grid.
    #[error("The number of a row or a column is out of bounds!")]
    InvalidSeatLocation,

    /// The seat has already been sold.
    #[error("The ticket has been already purchased!")]
    SeatUnavailable,

    /// No sold seat holds the presented return token.
    #[error("Wrong token!")]
    InvalidToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Theater(#[from] TheaterError),

    #[error("The password is wrong!")]
    Unauthorized,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Theater(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), "rejected request: {}", self);

        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
