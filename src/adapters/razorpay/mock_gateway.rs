//! Mock payment gateway for tests and local development.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::subscription::SubscriptionStatus;
use crate::ports::{
    CreateSubscriptionRequest, GatewayError, GatewaySubscription, PaymentGateway,
    SubscriptionSummary,
};

/// In-memory `PaymentGateway` implementation.
///
/// Issues sequential subscription ids, tracks every created/cancelled
/// subscription, and never fails unless configured to.
pub struct MockPaymentGateway {
    next_id: AtomicU64,
    subscriptions: Mutex<Vec<SubscriptionSummary>>,
    fail_all: bool,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            subscriptions: Mutex::new(Vec::new()),
            fail_all: false,
        }
    }

    /// A gateway where every call fails with a provider error.
    pub fn failing() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            subscriptions: Mutex::new(Vec::new()),
            fail_all: true,
        }
    }

    fn guard(&self) -> Result<(), GatewayError> {
        if self.fail_all {
            return Err(GatewayError::provider("mock gateway configured to fail"));
        }
        Ok(())
    }
}

impl Default for MockPaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_subscription(
        &self,
        request: CreateSubscriptionRequest,
    ) -> Result<GatewaySubscription, GatewayError> {
        self.guard()?;

        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let id = format!("sub_mock{:06}", n);

        self.subscriptions.lock().unwrap().push(SubscriptionSummary {
            id: id.clone(),
            plan_id: Some(request.plan_id),
            status: SubscriptionStatus::Created,
            created_at: 1754300000 + n as i64,
        });

        Ok(GatewaySubscription {
            id,
            status: SubscriptionStatus::Created,
        })
    }

    async fn cancel_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<GatewaySubscription, GatewayError> {
        self.guard()?;

        let mut subscriptions = self.subscriptions.lock().unwrap();
        let subscription = subscriptions
            .iter_mut()
            .find(|s| s.id == subscription_id)
            .ok_or_else(|| GatewayError::not_found("subscription"))?;

        subscription.status = SubscriptionStatus::Cancelled;
        Ok(GatewaySubscription {
            id: subscription.id.clone(),
            status: SubscriptionStatus::Cancelled,
        })
    }

    async fn list_subscriptions(
        &self,
        count: u32,
    ) -> Result<Vec<SubscriptionSummary>, GatewayError> {
        self.guard()?;

        let subscriptions = self.subscriptions.lock().unwrap();
        Ok(subscriptions
            .iter()
            .rev()
            .take(count as usize)
            .cloned()
            .collect())
    }
}
