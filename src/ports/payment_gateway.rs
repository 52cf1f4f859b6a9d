//! Payment gateway port.
//!
//! Defines the contract for the external payment SaaS that owns subscription
//! state. The application never talks to the gateway directly; it goes
//! through this trait so tests can inject a fake and so the process-wide
//! singleton client of the legacy service is replaced by an explicit
//! dependency.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::subscription::SubscriptionStatus;

/// Port for the payment gateway.
///
/// No retry or timeout policy is applied here: a transient gateway failure
/// surfaces immediately to the caller.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a subscription instance for the configured plan.
    async fn create_subscription(
        &self,
        request: CreateSubscriptionRequest,
    ) -> Result<GatewaySubscription, GatewayError>;

    /// Cancel a subscription. Returns the gateway's post-cancel state.
    async fn cancel_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<GatewaySubscription, GatewayError>;

    /// List up to `count` subscriptions, most recent first.
    async fn list_subscriptions(
        &self,
        count: u32,
    ) -> Result<Vec<SubscriptionSummary>, GatewayError>;
}

/// Request to create a gateway subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubscriptionRequest {
    /// Gateway plan identifier from configuration.
    pub plan_id: String,

    /// Fixed number of billing cycles to schedule.
    pub total_cycles: u32,

    /// Whether the gateway should notify the customer directly.
    pub notify_customer: bool,
}

/// Subscription state as reported by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewaySubscription {
    /// Gateway-owned subscription identifier.
    pub id: String,

    /// Gateway-reported status.
    pub status: SubscriptionStatus,
}

/// Summary row returned by the list operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionSummary {
    pub id: String,
    pub plan_id: Option<String>,
    pub status: SubscriptionStatus,
    /// Gateway creation time (Unix seconds).
    pub created_at: i64,
}

/// Errors from gateway operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayError {
    pub code: GatewayErrorCode,
    pub message: String,
}

impl GatewayError {
    pub fn new(code: GatewayErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Network, message)
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Authentication, message)
    }

    /// The gateway answered but the payload was unusable (e.g. no id).
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::InvalidResponse, message)
    }

    pub fn not_found(resource: &str) -> Self {
        Self::new(GatewayErrorCode::NotFound, format!("{} not found", resource))
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Provider, message)
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for GatewayError {}

/// Gateway error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorCode {
    Network,
    Authentication,
    NotFound,
    InvalidResponse,
    Provider,
    Unknown,
}

impl std::fmt::Display for GatewayErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GatewayErrorCode::Network => "network_error",
            GatewayErrorCode::Authentication => "authentication_error",
            GatewayErrorCode::NotFound => "not_found",
            GatewayErrorCode::InvalidResponse => "invalid_response",
            GatewayErrorCode::Provider => "provider_error",
            GatewayErrorCode::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn PaymentGateway) {}
    }

    #[test]
    fn gateway_error_display_includes_code_and_message() {
        let err = GatewayError::network("connection refused");
        assert!(err.to_string().contains("network_error"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn invalid_response_uses_invalid_response_code() {
        let err = GatewayError::invalid_response("missing id");
        assert_eq!(err.code, GatewayErrorCode::InvalidResponse);
    }
}
