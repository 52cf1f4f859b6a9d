//! Centralized HTTP error responder.
//!
//! Every controller-level failure funnels through `ApiError`, which maps an
//! error's code to an HTTP status (default 500) and renders the uniform JSON
//! error envelope. First failure aborts the request; there are no partial
//! responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::domain::course::CourseError;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::subscription::SubscriptionError;

/// Uniform error envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// API error carrying the mapped status and user-facing message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

/// Maps a domain error code to an HTTP status. Anything unmapped is a 500.
fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::InvalidFormat
        | ErrorCode::NoSubscriptionOnRecord
        | ErrorCode::VerificationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::AlreadySubscribed | ErrorCode::InvalidStateTransition => StatusCode::CONFLICT,
        ErrorCode::UserNotFound | ErrorCode::CourseNotFound | ErrorCode::LectureNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::GatewayError => StatusCode::BAD_GATEWAY,
        ErrorCode::MediaStorageError
        | ErrorCode::MailerError
        | ErrorCode::DatabaseError
        | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<SubscriptionError> for ApiError {
    fn from(err: SubscriptionError) -> Self {
        Self::new(status_for(err.code()), err.message())
    }
}

impl From<CourseError> for ApiError {
    fn from(err: CourseError) -> Self {
        Self::new(status_for(err.code()), err.message())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::new(status_for(err.code), err.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new(self.message);
        (self.status, Json(body)).into_response()
    }
}
