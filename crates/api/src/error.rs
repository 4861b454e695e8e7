//! Unified error handling with Sentry integration.
//!
//! Every handler returns `Result<T, AppError>`. Errors render as a JSON
//! `{message}` body. Server-side failures are captured to Sentry before
//! responding.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use order_desk_core::IdError;

use crate::db::StoreError;
use crate::models::{MessageResponse, ValidationError};

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Required field missing or request body malformed.
    #[error("{0}")]
    Validation(String),

    /// Path identifier is not a valid ID.
    #[error(transparent)]
    InvalidId(#[from] IdError),

    /// The store refused a write (duplicate email, connection failure, ...).
    #[error("{0}")]
    Rejected(StoreError),

    /// The store failed while reading.
    #[error("{0}")]
    Storage(StoreError),

    /// Payment settlement did not finish in time.
    #[error("payment settlement timed out after {0} ms")]
    SettlementTimeout(u128),
}

impl AppError {
    /// Map a storage failure on a write path.
    ///
    /// Write paths answer 400 for every store error, connection failures
    /// included, so clients see one failure status per operation.
    #[must_use]
    pub const fn rejected(err: StoreError) -> Self {
        Self::Rejected(err)
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidId(_) | Self::Rejected(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SettlementTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Storage(err)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use http_body_util::BodyExt;

    use order_desk_core::CustomerId;

    use super::*;

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            AppError::Validation("x".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(CustomerId::parse("abc").unwrap_err()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::rejected(StoreError::Closed).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(StoreError::Closed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::SettlementTimeout(10).status(),
            StatusCode::GATEWAY_TIMEOUT
        );
    }

    #[test]
    fn test_conflict_message_is_passed_through() {
        let err = AppError::rejected(StoreError::duplicate_email("ada@x.com"));
        assert_eq!(
            err.to_string(),
            "duplicate key error: email \"ada@x.com\" already exists"
        );
    }

    #[tokio::test]
    async fn test_response_body_is_json_message() {
        let response = AppError::Validation("bad input".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: MessageResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.message, "bad input");
    }
}
