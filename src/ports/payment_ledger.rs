//! Payment ledger port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::subscription::PaymentRecord;

/// Append-only store of verified payment records.
///
/// The trait deliberately exposes no update or delete operation: a record is
/// immutable once written, and it is only written after signature
/// verification has succeeded.
#[async_trait]
pub trait PaymentLedger: Send + Sync {
    /// Append one verified payment record.
    async fn append(&self, record: &PaymentRecord) -> Result<(), DomainError>;
}
