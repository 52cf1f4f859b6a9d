//! Razorpay gateway adapter.
//!
//! Implements the `PaymentGateway` trait against the Razorpay REST API.
//! Calls carry no retry or application-level timeout: a hung upstream call
//! is bounded only by the HTTP client's own socket behavior.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use crate::domain::subscription::SubscriptionStatus;
use crate::ports::{
    CreateSubscriptionRequest, GatewayError, GatewaySubscription, PaymentGateway,
    SubscriptionSummary,
};

/// Razorpay API configuration.
#[derive(Clone)]
pub struct RazorpayConfig {
    /// Publishable key id (rzp_test_... or rzp_live_...).
    key_id: String,

    /// Private key secret used for basic auth.
    key_secret: SecretString,

    /// Base URL for the Razorpay API.
    api_base_url: String,
}

impl RazorpayConfig {
    /// Create a new Razorpay configuration.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: SecretString::new(key_secret.into()),
            api_base_url: "https://api.razorpay.com".to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Razorpay gateway adapter.
pub struct RazorpayGatewayAdapter {
    config: RazorpayConfig,
    http_client: reqwest::Client,
}

impl RazorpayGatewayAdapter {
    /// Create a new adapter with the given configuration.
    pub fn new(config: RazorpayConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    async fn check_status(response: reqwest::Response, op: &str) -> Result<reqwest::Response, GatewayError> {
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(GatewayError::authentication("Invalid gateway credentials"));
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GatewayError::not_found("subscription"));
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(op, status = %status, error = %error_text, "gateway call failed");
            return Err(GatewayError::provider(format!(
                "Gateway API error: {}",
                error_text
            )));
        }
        Ok(response)
    }
}

/// Subscription entity as returned by the Razorpay API.
#[derive(Debug, Deserialize)]
struct ApiSubscription {
    #[serde(default)]
    id: String,
    #[serde(default)]
    plan_id: Option<String>,
    status: String,
    #[serde(default)]
    created_at: i64,
}

impl ApiSubscription {
    fn status(&self) -> Result<SubscriptionStatus, GatewayError> {
        parse_status(&self.status)
    }
}

/// Collection envelope for list responses.
#[derive(Debug, Deserialize)]
struct ApiCollection {
    #[serde(default)]
    items: Vec<ApiSubscription>,
}

fn parse_status(raw: &str) -> Result<SubscriptionStatus, GatewayError> {
    match raw {
        "created" => Ok(SubscriptionStatus::Created),
        "authenticated" => Ok(SubscriptionStatus::Authenticated),
        "active" => Ok(SubscriptionStatus::Active),
        "pending" => Ok(SubscriptionStatus::Pending),
        "halted" => Ok(SubscriptionStatus::Halted),
        "cancelled" => Ok(SubscriptionStatus::Cancelled),
        "completed" => Ok(SubscriptionStatus::Completed),
        "expired" => Ok(SubscriptionStatus::Expired),
        other => Err(GatewayError::invalid_response(format!(
            "Unknown subscription status: {}",
            other
        ))),
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGatewayAdapter {
    async fn create_subscription(
        &self,
        request: CreateSubscriptionRequest,
    ) -> Result<GatewaySubscription, GatewayError> {
        let url = format!("{}/v1/subscriptions", self.config.api_base_url);

        let body = json!({
            "plan_id": request.plan_id,
            "total_count": request.total_cycles,
            "customer_notify": if request.notify_customer { 1 } else { 0 },
        });

        let response = self
            .http_client
            .post(&url)
            .basic_auth(
                &self.config.key_id,
                Some(self.config.key_secret.expose_secret()),
            )
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        let response = Self::check_status(response, "create_subscription").await?;

        let subscription: ApiSubscription = response
            .json()
            .await
            .map_err(|e| GatewayError::invalid_response(format!("Failed to parse response: {}", e)))?;

        if subscription.id.is_empty() {
            return Err(GatewayError::invalid_response(
                "Gateway did not return a subscription id",
            ));
        }

        let status = subscription.status()?;
        Ok(GatewaySubscription {
            id: subscription.id,
            status,
        })
    }

    async fn cancel_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<GatewaySubscription, GatewayError> {
        let url = format!(
            "{}/v1/subscriptions/{}/cancel",
            self.config.api_base_url, subscription_id
        );

        let response = self
            .http_client
            .post(&url)
            .basic_auth(
                &self.config.key_id,
                Some(self.config.key_secret.expose_secret()),
            )
            .json(&json!({}))
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        let response = Self::check_status(response, "cancel_subscription").await?;

        let subscription: ApiSubscription = response
            .json()
            .await
            .map_err(|e| GatewayError::invalid_response(format!("Failed to parse response: {}", e)))?;

        let status = subscription.status()?;
        Ok(GatewaySubscription {
            id: subscription.id,
            status,
        })
    }

    async fn list_subscriptions(
        &self,
        count: u32,
    ) -> Result<Vec<SubscriptionSummary>, GatewayError> {
        let url = format!("{}/v1/subscriptions", self.config.api_base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("count", count)])
            .basic_auth(
                &self.config.key_id,
                Some(self.config.key_secret.expose_secret()),
            )
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        let response = Self::check_status(response, "list_subscriptions").await?;

        let collection: ApiCollection = response
            .json()
            .await
            .map_err(|e| GatewayError::invalid_response(format!("Failed to parse response: {}", e)))?;

        collection
            .items
            .into_iter()
            .map(|item| {
                let status = item.status()?;
                Ok(SubscriptionSummary {
                    id: item.id,
                    plan_id: item.plan_id,
                    status,
                    created_at: item.created_at,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_status_covers_gateway_vocabulary() {
        assert_eq!(parse_status("created").unwrap(), SubscriptionStatus::Created);
        assert_eq!(parse_status("active").unwrap(), SubscriptionStatus::Active);
        assert_eq!(
            parse_status("cancelled").unwrap(),
            SubscriptionStatus::Cancelled
        );
        assert_eq!(parse_status("halted").unwrap(), SubscriptionStatus::Halted);
    }

    #[test]
    fn parse_status_rejects_unknown_values() {
        let err = parse_status("weird").unwrap_err();
        assert!(err.message.contains("weird"));
    }

    #[test]
    fn api_subscription_deserializes_with_missing_optionals() {
        let sub: ApiSubscription =
            serde_json::from_str(r#"{"id":"sub_1","status":"created"}"#).unwrap();
        assert_eq!(sub.id, "sub_1");
        assert!(sub.plan_id.is_none());
        assert_eq!(sub.created_at, 0);
    }

    #[test]
    fn collection_defaults_to_empty_items() {
        let collection: ApiCollection = serde_json::from_str(r#"{"entity":"collection"}"#).unwrap();
        assert!(collection.items.is_empty());
    }
}
