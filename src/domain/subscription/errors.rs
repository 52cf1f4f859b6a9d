//! Subscription-specific error types.
//!
//! The taxonomy the payment flow reports through the centralized error
//! responder.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | CallerNotFound | 401 |
//! | AdminNotEligible | 403 |
//! | AlreadySubscribed | 409 |
//! | NoSubscriptionOnRecord | 400 |
//! | ValidationFailed | 400 |
//! | VerificationFailed | 400 |
//! | Gateway | 502 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

/// Errors raised by the subscription manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// The authenticated caller does not resolve to a stored user.
    CallerNotFound(UserId),

    /// Admins cannot purchase or cancel subscriptions.
    AdminNotEligible,

    /// A live subscription already exists for this user.
    AlreadySubscribed { subscription_id: String },

    /// The operation requires a previously created subscription.
    NoSubscriptionOnRecord,

    /// A request field is missing or malformed.
    ValidationFailed { field: String, message: String },

    /// The supplied payment signature did not match.
    VerificationFailed,

    /// The gateway call failed or returned unusable data.
    Gateway { reason: String },

    /// Persistence or other unexpected failure.
    Infrastructure(String),
}

impl SubscriptionError {
    pub fn caller_not_found(user_id: UserId) -> Self {
        SubscriptionError::CallerNotFound(user_id)
    }

    pub fn admin_not_eligible() -> Self {
        SubscriptionError::AdminNotEligible
    }

    pub fn already_subscribed(subscription_id: impl Into<String>) -> Self {
        SubscriptionError::AlreadySubscribed {
            subscription_id: subscription_id.into(),
        }
    }

    pub fn no_subscription_on_record() -> Self {
        SubscriptionError::NoSubscriptionOnRecord
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SubscriptionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn verification_failed() -> Self {
        SubscriptionError::VerificationFailed
    }

    pub fn gateway(reason: impl Into<String>) -> Self {
        SubscriptionError::Gateway {
            reason: reason.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SubscriptionError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SubscriptionError::CallerNotFound(_) => ErrorCode::Unauthenticated,
            SubscriptionError::AdminNotEligible => ErrorCode::Forbidden,
            SubscriptionError::AlreadySubscribed { .. } => ErrorCode::AlreadySubscribed,
            SubscriptionError::NoSubscriptionOnRecord => ErrorCode::NoSubscriptionOnRecord,
            SubscriptionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SubscriptionError::VerificationFailed => ErrorCode::VerificationFailed,
            SubscriptionError::Gateway { .. } => ErrorCode::GatewayError,
            SubscriptionError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            SubscriptionError::CallerNotFound(_) => {
                "Unauthorized, please log in".to_string()
            }
            SubscriptionError::AdminNotEligible => {
                "Admin accounts cannot purchase a subscription".to_string()
            }
            SubscriptionError::AlreadySubscribed { subscription_id } => {
                format!("A subscription already exists: {}", subscription_id)
            }
            SubscriptionError::NoSubscriptionOnRecord => {
                "No subscription on record for this user".to_string()
            }
            SubscriptionError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            SubscriptionError::VerificationFailed => {
                "Payment not verified, please try again".to_string()
            }
            SubscriptionError::Gateway { reason } => {
                format!("Payment gateway error: {}", reason)
            }
            SubscriptionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SubscriptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SubscriptionError {}

impl From<DomainError> for SubscriptionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Unauthenticated | ErrorCode::UserNotFound => {
                SubscriptionError::Infrastructure(err.to_string())
            }
            ErrorCode::Forbidden => SubscriptionError::AdminNotEligible,
            ErrorCode::AlreadySubscribed => SubscriptionError::AlreadySubscribed {
                subscription_id: err
                    .details
                    .get("subscription_id")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
            },
            ErrorCode::NoSubscriptionOnRecord => SubscriptionError::NoSubscriptionOnRecord,
            ErrorCode::VerificationFailed => SubscriptionError::VerificationFailed,
            ErrorCode::ValidationFailed | ErrorCode::InvalidStateTransition => {
                SubscriptionError::ValidationFailed {
                    field: "state".to_string(),
                    message: err.to_string(),
                }
            }
            ErrorCode::GatewayError => SubscriptionError::Gateway {
                reason: err.to_string(),
            },
            _ => SubscriptionError::Infrastructure(err.to_string()),
        }
    }
}

impl From<SubscriptionError> for DomainError {
    fn from(err: SubscriptionError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
