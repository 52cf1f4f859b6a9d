//! Subscription status state machine.
//!
//! Statuses are owned by the payment gateway and mirrored locally after each
//! gateway call or verified payment. The state machine constrains the
//! transitions this service performs itself; statuses mirrored verbatim from
//! the gateway bypass it by design.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Gateway-defined subscription status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Subscription was created at the gateway; first payment not yet made.
    Created,

    /// Payment method authenticated, awaiting first charge.
    Authenticated,

    /// Paid and current. The only status granting content access.
    Active,

    /// A charge is pending at the gateway.
    Pending,

    /// Charges failed and retries were exhausted; subscription is on hold.
    Halted,

    /// Cancelled by the user or the gateway.
    Cancelled,

    /// All billing cycles completed.
    Completed,

    /// Subscription lapsed without completing.
    Expired,
}

impl SubscriptionStatus {
    /// Returns true if this status grants access to paid content.
    pub fn grants_access(&self) -> bool {
        matches!(self, SubscriptionStatus::Active)
    }

    /// Returns true if the subscription is still in flight at the gateway.
    ///
    /// A live subscription blocks creating a second one for the same user.
    pub fn is_live(&self) -> bool {
        matches!(
            self,
            SubscriptionStatus::Created
                | SubscriptionStatus::Authenticated
                | SubscriptionStatus::Active
                | SubscriptionStatus::Pending
        )
    }
}

impl StateMachine for SubscriptionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubscriptionStatus::*;
        matches!(
            (self, target),
            // From CREATED
            (Created, Authenticated)
                | (Created, Active)
                | (Created, Cancelled)
                | (Created, Expired)
            // From AUTHENTICATED
                | (Authenticated, Active)
                | (Authenticated, Cancelled)
            // From ACTIVE
                | (Active, Pending)
                | (Active, Halted)
                | (Active, Cancelled)
                | (Active, Completed)
            // From PENDING
                | (Pending, Active)
                | (Pending, Halted)
                | (Pending, Cancelled)
            // From HALTED
                | (Halted, Active)
                | (Halted, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubscriptionStatus::*;
        match self {
            Created => vec![Authenticated, Active, Cancelled, Expired],
            Authenticated => vec![Active, Cancelled],
            Active => vec![Pending, Halted, Cancelled, Completed],
            Pending => vec![Active, Halted, Cancelled],
            Halted => vec![Active, Cancelled],
            Cancelled => vec![],
            Completed => vec![],
            Expired => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_can_activate_on_verified_payment() {
        let result = SubscriptionStatus::Created.transition_to(SubscriptionStatus::Active);
        assert_eq!(result, Ok(SubscriptionStatus::Active));
    }

    #[test]
    fn created_can_cancel_before_payment() {
        assert!(SubscriptionStatus::Created.can_transition_to(&SubscriptionStatus::Cancelled));
    }

    #[test]
    fn cancelled_is_terminal() {
        assert!(SubscriptionStatus::Cancelled.is_terminal());
        assert!(SubscriptionStatus::Cancelled
            .transition_to(SubscriptionStatus::Active)
            .is_err());
    }

    #[test]
    fn only_active_grants_access() {
        assert!(SubscriptionStatus::Active.grants_access());

        for status in [
            SubscriptionStatus::Created,
            SubscriptionStatus::Authenticated,
            SubscriptionStatus::Pending,
            SubscriptionStatus::Halted,
            SubscriptionStatus::Cancelled,
            SubscriptionStatus::Completed,
            SubscriptionStatus::Expired,
        ] {
            assert!(!status.grants_access(), "{:?} must not grant access", status);
        }
    }

    #[test]
    fn live_statuses_block_resubscribe() {
        assert!(SubscriptionStatus::Created.is_live());
        assert!(SubscriptionStatus::Active.is_live());
        assert!(!SubscriptionStatus::Cancelled.is_live());
        assert!(!SubscriptionStatus::Expired.is_live());
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&SubscriptionStatus::Created).unwrap(),
            "\"created\""
        );
        let parsed: SubscriptionStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(parsed, SubscriptionStatus::Active);
    }

    #[test]
    fn valid_transitions_are_consistent_with_can_transition_to() {
        for status in [
            SubscriptionStatus::Created,
            SubscriptionStatus::Authenticated,
            SubscriptionStatus::Active,
            SubscriptionStatus::Pending,
            SubscriptionStatus::Halted,
            SubscriptionStatus::Cancelled,
            SubscriptionStatus::Completed,
            SubscriptionStatus::Expired,
        ] {
            for target in status.valid_transitions() {
                assert!(
                    status.can_transition_to(&target),
                    "can_transition_to should allow {:?} -> {:?}",
                    status,
                    target
                );
            }
        }
    }
}
