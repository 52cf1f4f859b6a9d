//! ListPaymentsHandler - admin query over gateway-side subscriptions.

use std::sync::Arc;

use crate::domain::subscription::SubscriptionError;
use crate::ports::{PaymentGateway, SubscriptionSummary};

/// Number of records requested when the caller supplies no usable count.
const DEFAULT_COUNT: u32 = 10;

/// Query for recent gateway subscriptions.
#[derive(Debug, Clone, Default)]
pub struct ListPaymentsQuery {
    /// Raw `count` query parameter, if any. Coerced to a positive integer
    /// with a fallback of 10 for anything non-numeric or non-positive.
    pub count: Option<String>,
}

/// Result listing gateway subscription summaries.
#[derive(Debug, Clone)]
pub struct ListPaymentsResult {
    pub subscriptions: Vec<SubscriptionSummary>,
}

/// Handler for listing gateway payments. Read-only; no local state changes.
pub struct ListPaymentsHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl ListPaymentsHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        query: ListPaymentsQuery,
    ) -> Result<ListPaymentsResult, SubscriptionError> {
        let count = coerce_count(query.count.as_deref());

        let subscriptions = self
            .gateway
            .list_subscriptions(count)
            .await
            .map_err(|e| SubscriptionError::gateway(format!("Failed to fetch subscriptions: {}", e)))?;

        Ok(ListPaymentsResult { subscriptions })
    }
}

/// Coerces the raw count parameter to a positive integer, defaulting to 10.
fn coerce_count(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_COUNT)
}
