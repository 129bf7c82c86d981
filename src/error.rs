//! HTTP-facing error type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error};
use tracing::warn;

/// A rejected request, rendered as a plain-text response.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ApiError {
    /// Malformed parameters or an illegal move (400).
    #[display("{}", _0)]
    BadRequest(#[error(not(source))] String),

    /// Unknown game (404).
    #[display("{}", _0)]
    NotFound(#[error(not(source))] String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub(crate) fn game_not_found() -> Self {
        ApiError::NotFound("Requested game not found".to_string())
    }

    pub(crate) fn missing_game_id() -> Self {
        ApiError::BadRequest("Please provide a game ID for your move".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), error = %self, "Request rejected");
        (status, self.to_string()).into_response()
    }
}
