//! MongoDB implementation of the payment ledger.

use async_trait::async_trait;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::subscription::PaymentRecord;
use crate::ports::PaymentLedger;

const COLLECTION: &str = "payments";

/// Payment record document. Uses the gateway payment id as `_id`, so a
/// replayed verification of the same payment cannot create a second row.
#[derive(Debug, Serialize, Deserialize)]
struct PaymentDocument {
    #[serde(rename = "_id")]
    payment_id: String,
    signature: String,
    subscription_id: String,
    owner_user_id: String,
    created_at: Timestamp,
}

impl From<&PaymentRecord> for PaymentDocument {
    fn from(record: &PaymentRecord) -> Self {
        Self {
            payment_id: record.payment_id.clone(),
            signature: record.signature.clone(),
            subscription_id: record.subscription_id.clone(),
            owner_user_id: record.owner_user_id.to_string(),
            created_at: record.created_at,
        }
    }
}

/// MongoDB-backed `PaymentLedger`. Append-only: the adapter exposes no
/// update or delete path.
pub struct MongoPaymentLedger {
    collection: Collection<PaymentDocument>,
}

impl MongoPaymentLedger {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl PaymentLedger for MongoPaymentLedger {
    async fn append(&self, record: &PaymentRecord) -> Result<(), DomainError> {
        let document = PaymentDocument::from(record);
        self.collection
            .insert_one(&document)
            .await
            .map_err(|e| DomainError::new(ErrorCode::DatabaseError, e.to_string()))?;
        Ok(())
    }
}
