//! CancelSubscriptionHandler - command handler for cancelling subscriptions.
//!
//! Cancellation is not a payment event: the ledger is never written here.
//! The gateway owns the resulting status and it is mirrored verbatim.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::subscription::{SubscriptionError, SubscriptionStatus};
use crate::ports::{PaymentGateway, UserRepository};

/// Command to cancel the caller's subscription.
#[derive(Debug, Clone)]
pub struct CancelSubscriptionCommand {
    pub user_id: UserId,
}

/// Result of a successful cancellation.
#[derive(Debug, Clone)]
pub struct CancelSubscriptionResult {
    pub subscription_id: String,
    /// Gateway-reported status after cancellation.
    pub status: SubscriptionStatus,
}

/// Handler for cancelling subscriptions.
pub struct CancelSubscriptionHandler {
    users: Arc<dyn UserRepository>,
    gateway: Arc<dyn PaymentGateway>,
}

impl CancelSubscriptionHandler {
    pub fn new(users: Arc<dyn UserRepository>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { users, gateway }
    }

    pub async fn handle(
        &self,
        cmd: CancelSubscriptionCommand,
    ) -> Result<CancelSubscriptionResult, SubscriptionError> {
        // 1. Resolve the caller
        let mut user = self
            .users
            .find_by_id(&cmd.user_id)
            .await
            .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?
            .ok_or_else(|| SubscriptionError::caller_not_found(cmd.user_id.clone()))?;

        // 2. Policy and precondition checks
        if !user.role.can_hold_subscription() {
            return Err(SubscriptionError::admin_not_eligible());
        }
        let subscription_id = user.subscription_id()?.to_string();

        // 3. Cancel at the gateway
        let subscription = self
            .gateway
            .cancel_subscription(&subscription_id)
            .await
            .map_err(|e| SubscriptionError::gateway(e.to_string()))?;

        // 4. Mirror the gateway status and persist
        user.mirror_gateway_status(subscription.status)?;
        self.users
            .update(&user)
            .await
            .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?;

        tracing::info!(
            user_id = %user.id,
            subscription_id = %subscription_id,
            status = ?subscription.status,
            "subscription cancelled"
        );

        Ok(CancelSubscriptionResult {
            subscription_id,
            status: subscription.status,
        })
    }
}
