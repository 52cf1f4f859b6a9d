//! Append-only payment ledger entry.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

/// Immutable audit record proving a payment signature was verified.
///
/// A record is written only AFTER signature verification succeeds, never
/// before, and is never updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Gateway payment identifier.
    pub payment_id: String,

    /// The verified signature as supplied by the caller.
    pub signature: String,

    /// Gateway subscription identifier the payment belongs to.
    pub subscription_id: String,

    /// User who owns the subscription.
    pub owner_user_id: UserId,

    /// When the record was written.
    pub created_at: Timestamp,
}

impl PaymentRecord {
    /// Creates a ledger entry for a verified payment.
    pub fn verified(
        payment_id: impl Into<String>,
        signature: impl Into<String>,
        subscription_id: impl Into<String>,
        owner_user_id: UserId,
    ) -> Self {
        Self {
            payment_id: payment_id.into(),
            signature: signature.into(),
            subscription_id: subscription_id.into(),
            owner_user_id,
            created_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verified_captures_all_fields() {
        let record = PaymentRecord::verified(
            "pay_1",
            "deadbeef",
            "sub_1",
            UserId::new("user-1").unwrap(),
        );

        assert_eq!(record.payment_id, "pay_1");
        assert_eq!(record.signature, "deadbeef");
        assert_eq!(record.subscription_id, "sub_1");
        assert_eq!(record.owner_user_id.as_str(), "user-1");
    }
}
