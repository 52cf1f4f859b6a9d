//! CreateSubscriptionHandler - command handler for purchasing a subscription.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::subscription::{SubscriptionError, SubscriptionStatus};
use crate::ports::{CreateSubscriptionRequest, PaymentGateway, UserRepository};

/// Command to create a subscription for the authenticated caller.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionCommand {
    pub user_id: UserId,
}

/// Result of a successful subscription creation.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionResult {
    pub subscription_id: String,
    pub status: SubscriptionStatus,
}

/// Handler for creating subscriptions.
///
/// Eligibility is checked before the gateway is invoked so an ineligible
/// caller never creates an orphan subscription at the gateway.
pub struct CreateSubscriptionHandler {
    users: Arc<dyn UserRepository>,
    gateway: Arc<dyn PaymentGateway>,
    plan_id: String,
    billing_cycles: u32,
}

impl CreateSubscriptionHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        gateway: Arc<dyn PaymentGateway>,
        plan_id: impl Into<String>,
        billing_cycles: u32,
    ) -> Self {
        Self {
            users,
            gateway,
            plan_id: plan_id.into(),
            billing_cycles,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateSubscriptionCommand,
    ) -> Result<CreateSubscriptionResult, SubscriptionError> {
        // 1. Resolve the caller
        let mut user = self
            .users
            .find_by_id(&cmd.user_id)
            .await
            .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?
            .ok_or_else(|| SubscriptionError::caller_not_found(cmd.user_id.clone()))?;

        // 2. Policy checks before touching the gateway
        if !user.role.can_hold_subscription() {
            return Err(SubscriptionError::admin_not_eligible());
        }
        if let Some(existing) = &user.subscription {
            if existing.status.is_live() {
                return Err(SubscriptionError::already_subscribed(existing.id.clone()));
            }
        }

        // 3. Create the gateway subscription
        let subscription = self
            .gateway
            .create_subscription(CreateSubscriptionRequest {
                plan_id: self.plan_id.clone(),
                total_cycles: self.billing_cycles,
                notify_customer: true,
            })
            .await
            .map_err(|e| SubscriptionError::gateway(e.to_string()))?;

        if subscription.id.is_empty() {
            return Err(SubscriptionError::gateway(
                "Gateway did not return a usable subscription id",
            ));
        }

        // 4. Mirror the gateway state onto the user and persist
        user.start_subscription(subscription.id.clone(), subscription.status)?;

        self.users
            .update(&user)
            .await
            .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?;

        tracing::info!(
            user_id = %user.id,
            subscription_id = %subscription.id,
            "subscription created"
        );

        Ok(CreateSubscriptionResult {
            subscription_id: subscription.id,
            status: subscription.status,
        })
    }
}
