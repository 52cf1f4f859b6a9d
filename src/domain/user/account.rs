//! User aggregate entity.
//!
//! Each user holds at most one subscription record. The record mirrors
//! gateway-owned state and is only mutated through the methods here so the
//! status state machine cannot be bypassed.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::subscription::SubscriptionStatus;

use super::Role;

/// Gateway-owned subscription state mirrored onto the user document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    /// The gateway's subscription identifier.
    pub id: String,

    /// Last status reported by (or derived from) the gateway.
    pub status: SubscriptionStatus,
}

/// User aggregate.
///
/// # Invariants
///
/// - `id` is globally unique
/// - ADMIN users never hold an active subscription
/// - `subscription.status` only changes along the status state machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub subscription: Option<SubscriptionRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Creates a new user with no subscription.
    pub fn new(id: UserId, email: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            email: email.into(),
            name: name.into(),
            role,
            subscription: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the stored subscription id.
    ///
    /// # Errors
    ///
    /// Returns `NoSubscriptionOnRecord` when the user never created a
    /// subscription, rather than assuming the field is present.
    pub fn subscription_id(&self) -> Result<&str, DomainError> {
        self.subscription
            .as_ref()
            .map(|s| s.id.as_str())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::NoSubscriptionOnRecord,
                    "No subscription on record for this user",
                )
            })
    }

    /// Returns true if the user currently holds an access-granting subscription.
    pub fn has_active_subscription(&self) -> bool {
        self.subscription
            .as_ref()
            .map(|s| s.status.grants_access())
            .unwrap_or(false)
    }

    /// Records a freshly created gateway subscription.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if the user is an admin
    /// - `AlreadySubscribed` if a live (created/authenticated/active/pending)
    ///   subscription is already on record
    pub fn start_subscription(
        &mut self,
        subscription_id: impl Into<String>,
        status: SubscriptionStatus,
    ) -> Result<(), DomainError> {
        if !self.role.can_hold_subscription() {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "Admin accounts cannot purchase a subscription",
            ));
        }

        if let Some(existing) = &self.subscription {
            if existing.status.is_live() {
                return Err(DomainError::new(
                    ErrorCode::AlreadySubscribed,
                    format!("A subscription is already on record: {}", existing.id),
                ));
            }
        }

        self.subscription = Some(SubscriptionRecord {
            id: subscription_id.into(),
            status,
        });
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Activates the stored subscription after a verified payment.
    ///
    /// # Errors
    ///
    /// - `NoSubscriptionOnRecord` if no subscription exists
    /// - `InvalidStateTransition` if the current status cannot become active
    pub fn activate_subscription(&mut self) -> Result<(), DomainError> {
        use crate::domain::foundation::StateMachine;

        let record = self.subscription.as_mut().ok_or_else(|| {
            DomainError::new(
                ErrorCode::NoSubscriptionOnRecord,
                "No subscription on record for this user",
            )
        })?;

        record.status = record
            .status
            .transition_to(SubscriptionStatus::Active)
            .map_err(|_| {
                DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    format!("Cannot activate a {:?} subscription", record.status),
                )
            })?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Mirrors the gateway-reported status after a cancellation call.
    ///
    /// The gateway owns the final status value; no local transition check is
    /// applied beyond requiring that a record exists.
    pub fn mirror_gateway_status(&mut self, status: SubscriptionStatus) -> Result<(), DomainError> {
        let record = self.subscription.as_mut().ok_or_else(|| {
            DomainError::new(
                ErrorCode::NoSubscriptionOnRecord,
                "No subscription on record for this user",
            )
        })?;

        record.status = status;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}
