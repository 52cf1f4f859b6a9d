//! Course-specific error types.

use crate::domain::foundation::{CourseId, DomainError, ErrorCode, LectureId, ValidationError};

/// Errors raised by course management.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseError {
    /// The caller does not resolve to a stored user.
    Unauthorized,

    /// The caller's role or subscription does not allow the operation.
    AccessDenied { reason: String },

    /// No course with the given id exists.
    NotFound(CourseId),

    /// No lecture with the given id exists in the course.
    LectureNotFound(LectureId),

    /// A request field is missing or malformed.
    ValidationFailed { field: String, message: String },

    /// Media upload or deletion failed.
    MediaStorage { reason: String },

    /// Persistence or other unexpected failure.
    Infrastructure(String),
}

impl CourseError {
    pub fn unauthorized() -> Self {
        CourseError::Unauthorized
    }

    pub fn access_denied(reason: impl Into<String>) -> Self {
        CourseError::AccessDenied {
            reason: reason.into(),
        }
    }

    pub fn not_found(id: CourseId) -> Self {
        CourseError::NotFound(id)
    }

    pub fn lecture_not_found(id: LectureId) -> Self {
        CourseError::LectureNotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CourseError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn media_storage(reason: impl Into<String>) -> Self {
        CourseError::MediaStorage {
            reason: reason.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        CourseError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CourseError::Unauthorized => ErrorCode::Unauthenticated,
            CourseError::AccessDenied { .. } => ErrorCode::Forbidden,
            CourseError::NotFound(_) => ErrorCode::CourseNotFound,
            CourseError::LectureNotFound(_) => ErrorCode::LectureNotFound,
            CourseError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            CourseError::MediaStorage { .. } => ErrorCode::MediaStorageError,
            CourseError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CourseError::Unauthorized => "Unauthorized, please log in".to_string(),
            CourseError::AccessDenied { reason } => reason.clone(),
            CourseError::NotFound(id) => format!("Course with id {} does not exist", id),
            CourseError::LectureNotFound(id) => {
                format!("Lecture with id {} does not exist", id)
            }
            CourseError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            CourseError::MediaStorage { reason } => format!("Media upload failed: {}", reason),
            CourseError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CourseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CourseError {}

impl From<ValidationError> for CourseError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field } => field.clone(),
            ValidationError::InvalidFormat { field, .. } => field.clone(),
        };
        CourseError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for CourseError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::CourseNotFound | ErrorCode::LectureNotFound => {
                CourseError::Infrastructure(err.to_string())
            }
            ErrorCode::ValidationFailed => CourseError::ValidationFailed {
                field: "unknown".to_string(),
                message: err.to_string(),
            },
            ErrorCode::MediaStorageError => CourseError::MediaStorage {
                reason: err.to_string(),
            },
            _ => CourseError::Infrastructure(err.to_string()),
        }
    }
}

impl From<CourseError> for DomainError {
    fn from(err: CourseError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
