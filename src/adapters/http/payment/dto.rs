//! HTTP DTOs for the payment endpoints.
//!
//! Every success response carries the uniform `{success, message, ...}`
//! envelope. Request field names follow the gateway's checkout callback
//! payload verbatim.

use serde::{Deserialize, Serialize};

use crate::domain::subscription::SubscriptionStatus;
use crate::ports::SubscriptionSummary;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of the verify endpoint, as posted by the checkout callback.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub razorpay_payment_id: String,
    #[serde(default)]
    pub razorpay_signature: String,
    #[serde(default)]
    pub razorpay_subscription_id: String,
}

/// Query parameters of the admin listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPaymentsParams {
    /// Raw count value; coercion happens in the application layer.
    pub count: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for the gateway key endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayKeyResponse {
    pub success: bool,
    pub message: String,
    pub key: String,
}

/// Response for a successful subscription purchase.
#[derive(Debug, Clone, Serialize)]
pub struct SubscribeResponse {
    pub success: bool,
    pub message: String,
    pub subscription_id: String,
}

/// Response for a successful payment verification.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub message: String,
}

/// Response for a successful cancellation.
#[derive(Debug, Clone, Serialize)]
pub struct UnsubscribeResponse {
    pub success: bool,
    pub message: String,
    pub status: SubscriptionStatus,
}

/// One row of the admin listing.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionSummaryResponse {
    pub id: String,
    pub plan_id: Option<String>,
    pub status: SubscriptionStatus,
    pub created_at: i64,
}

impl From<SubscriptionSummary> for SubscriptionSummaryResponse {
    fn from(summary: SubscriptionSummary) -> Self {
        Self {
            id: summary.id,
            plan_id: summary.plan_id,
            status: summary.status,
            created_at: summary.created_at,
        }
    }
}

/// Response for the admin listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ListPaymentsResponse {
    pub success: bool,
    pub message: String,
    pub subscriptions: Vec<SubscriptionSummaryResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_request_tolerates_missing_fields() {
        // Presence is validated by the application layer, not serde.
        let request: VerifyRequest = serde_json::from_str("{}").unwrap();
        assert!(request.razorpay_payment_id.is_empty());
    }

    #[test]
    fn subscribe_response_shape() {
        let response = SubscribeResponse {
            success: true,
            message: "Subscribed successfully".to_string(),
            subscription_id: "sub_1".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["subscription_id"], "sub_1");
    }
}
