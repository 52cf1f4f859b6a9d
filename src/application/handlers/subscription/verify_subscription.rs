//! VerifySubscriptionHandler - command handler for payment verification.
//!
//! Every money-related action downstream is gated on this handler: the
//! ledger is appended and the subscription activated only after the HMAC
//! comparison succeeds.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::subscription::{
    PaymentRecord, PaymentSignatureVerifier, SubscriptionError,
};
use crate::ports::{PaymentLedger, UserRepository};

/// Command carrying a gateway payment notification for verification.
#[derive(Debug, Clone)]
pub struct VerifySubscriptionCommand {
    pub user_id: UserId,
    pub payment_id: String,
    pub signature: String,
    pub subscription_id: String,
}

/// Result of a successful verification.
#[derive(Debug, Clone)]
pub struct VerifySubscriptionResult {
    pub payment_id: String,
}

/// Handler for verifying payments.
pub struct VerifySubscriptionHandler {
    users: Arc<dyn UserRepository>,
    ledger: Arc<dyn PaymentLedger>,
    verifier: PaymentSignatureVerifier,
}

impl VerifySubscriptionHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        ledger: Arc<dyn PaymentLedger>,
        verifier: PaymentSignatureVerifier,
    ) -> Self {
        Self {
            users,
            ledger,
            verifier,
        }
    }

    pub async fn handle(
        &self,
        cmd: VerifySubscriptionCommand,
    ) -> Result<VerifySubscriptionResult, SubscriptionError> {
        // 1. All fields are required
        for (field, value) in [
            ("razorpay_payment_id", &cmd.payment_id),
            ("razorpay_signature", &cmd.signature),
            ("razorpay_subscription_id", &cmd.subscription_id),
        ] {
            if value.trim().is_empty() {
                return Err(SubscriptionError::validation(field, "must not be empty"));
            }
        }

        // 2. Resolve the caller and their stored subscription
        let mut user = self
            .users
            .find_by_id(&cmd.user_id)
            .await
            .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?
            .ok_or_else(|| SubscriptionError::caller_not_found(cmd.user_id.clone()))?;

        let stored_subscription_id = user.subscription_id()?.to_string();

        // 3. Signature check. The HMAC covers the *stored* subscription id;
        //    nothing is written unless this comparison succeeds.
        self.verifier
            .verify(&cmd.payment_id, &stored_subscription_id, &cmd.signature)?;

        // 4. Append the verified payment to the ledger
        let record = PaymentRecord::verified(
            cmd.payment_id.clone(),
            cmd.signature,
            cmd.subscription_id,
            user.id.clone(),
        );
        self.ledger
            .append(&record)
            .await
            .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?;

        // 5. Activate and persist
        user.activate_subscription()?;
        self.users
            .update(&user)
            .await
            .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?;

        tracing::info!(
            user_id = %user.id,
            payment_id = %cmd.payment_id,
            "payment verified, subscription active"
        );

        Ok(VerifySubscriptionResult {
            payment_id: cmd.payment_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use crate::domain::subscription::SubscriptionStatus;
    use crate::domain::user::{Role, User};
    use async_trait::async_trait;
    use std::sync::Mutex;

    const TEST_SECRET: &str = "test_hmac_secret";

    // ════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════

    struct MockUserRepository {
        users: Mutex<Vec<User>>,
    }

    impl MockUserRepository {
        fn with_user(user: User) -> Self {
            Self {
                users: Mutex::new(vec![user]),
            }
        }

        fn empty() -> Self {
            Self {
                users: Mutex::new(Vec::new()),
            }
        }

        fn stored(&self, id: &UserId) -> Option<User> {
            self.users
                .lock()
                .unwrap()
                .iter()
                .find(|u| &u.id == id)
                .cloned()
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
            Ok(self.stored(id))
        }

        async fn update(&self, user: &User) -> Result<(), DomainError> {
            let mut users = self.users.lock().unwrap();
            if let Some(stored) = users.iter_mut().find(|u| u.id == user.id) {
                *stored = user.clone();
            }
            Ok(())
        }
    }

    struct MockPaymentLedger {
        records: Mutex<Vec<PaymentRecord>>,
        fail_append: bool,
    }

    impl MockPaymentLedger {
        fn new() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
                fail_append: false,
            }
        }

        fn failing() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
                fail_append: true,
            }
        }

        fn records(&self) -> Vec<PaymentRecord> {
            self.records.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PaymentLedger for MockPaymentLedger {
        async fn append(&self, record: &PaymentRecord) -> Result<(), DomainError> {
            if self.fail_append {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "Simulated append failure",
                ));
            }
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════

    fn test_user_id() -> UserId {
        UserId::new("user-123").unwrap()
    }

    fn subscriber_with_subscription(subscription_id: &str) -> User {
        let mut user = User::new(
            test_user_id(),
            "learner@example.com",
            "Learner",
            Role::Subscriber,
        );
        user.start_subscription(subscription_id, SubscriptionStatus::Created)
            .unwrap();
        user
    }

    fn valid_signature(payment_id: &str, subscription_id: &str) -> String {
        PaymentSignatureVerifier::new(TEST_SECRET).sign(payment_id, subscription_id)
    }

    fn handler(
        repo: Arc<MockUserRepository>,
        ledger: Arc<MockPaymentLedger>,
    ) -> VerifySubscriptionHandler {
        VerifySubscriptionHandler::new(repo, ledger, PaymentSignatureVerifier::new(TEST_SECRET))
    }

    fn command(payment_id: &str, signature: &str, subscription_id: &str) -> VerifySubscriptionCommand {
        VerifySubscriptionCommand {
            user_id: test_user_id(),
            payment_id: payment_id.to_string(),
            signature: signature.to_string(),
            subscription_id: subscription_id.to_string(),
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn valid_signature_activates_and_writes_exactly_one_record() {
        let repo = Arc::new(MockUserRepository::with_user(
            subscriber_with_subscription("sub_1"),
        ));
        let ledger = Arc::new(MockPaymentLedger::new());
        let handler = handler(repo.clone(), ledger.clone());

        let signature = valid_signature("pay_1", "sub_1");
        let result = handler.handle(command("pay_1", &signature, "sub_1")).await;

        assert!(result.is_ok());

        let records = ledger.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].payment_id, "pay_1");
        assert_eq!(records[0].subscription_id, "sub_1");
        assert_eq!(records[0].owner_user_id, test_user_id());

        let stored = repo.stored(&test_user_id()).unwrap();
        assert_eq!(
            stored.subscription.unwrap().status,
            SubscriptionStatus::Active
        );
    }

    // ════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn tampered_signature_writes_nothing_and_keeps_status() {
        let repo = Arc::new(MockUserRepository::with_user(
            subscriber_with_subscription("sub_1"),
        ));
        let ledger = Arc::new(MockPaymentLedger::new());
        let handler = handler(repo.clone(), ledger.clone());

        // Flip the last hex character of an otherwise valid signature
        let mut signature = valid_signature("pay_1", "sub_1");
        let last = signature.pop().unwrap();
        signature.push(if last == '0' { '1' } else { '0' });

        let result = handler.handle(command("pay_1", &signature, "sub_1")).await;

        assert!(matches!(result, Err(SubscriptionError::VerificationFailed)));
        assert!(ledger.records().is_empty());

        let stored = repo.stored(&test_user_id()).unwrap();
        assert_eq!(
            stored.subscription.unwrap().status,
            SubscriptionStatus::Created
        );
    }

    #[tokio::test]
    async fn signature_over_wrong_subscription_is_rejected() {
        let repo = Arc::new(MockUserRepository::with_user(
            subscriber_with_subscription("sub_1"),
        ));
        let ledger = Arc::new(MockPaymentLedger::new());
        let handler = handler(repo, ledger.clone());

        // Signed for a different subscription than the one on record
        let signature = valid_signature("pay_1", "sub_other");
        let result = handler
            .handle(command("pay_1", &signature, "sub_other"))
            .await;

        assert!(matches!(result, Err(SubscriptionError::VerificationFailed)));
        assert!(ledger.records().is_empty());
    }

    #[tokio::test]
    async fn missing_fields_are_validation_errors() {
        let repo = Arc::new(MockUserRepository::with_user(
            subscriber_with_subscription("sub_1"),
        ));
        let ledger = Arc::new(MockPaymentLedger::new());
        let handler = handler(repo, ledger);

        for cmd in [
            command("", "sig", "sub_1"),
            command("pay_1", "", "sub_1"),
            command("pay_1", "sig", ""),
        ] {
            let result = handler.handle(cmd).await;
            assert!(matches!(
                result,
                Err(SubscriptionError::ValidationFailed { .. })
            ));
        }
    }

    #[tokio::test]
    async fn unknown_caller_is_authentication_error() {
        let repo = Arc::new(MockUserRepository::empty());
        let ledger = Arc::new(MockPaymentLedger::new());
        let handler = handler(repo, ledger);

        let signature = valid_signature("pay_1", "sub_1");
        let result = handler.handle(command("pay_1", &signature, "sub_1")).await;

        assert!(matches!(result, Err(SubscriptionError::CallerNotFound(_))));
    }

    #[tokio::test]
    async fn caller_without_subscription_gets_typed_error() {
        let user = User::new(
            test_user_id(),
            "learner@example.com",
            "Learner",
            Role::Subscriber,
        );
        let repo = Arc::new(MockUserRepository::with_user(user));
        let ledger = Arc::new(MockPaymentLedger::new());
        let handler = handler(repo, ledger.clone());

        let signature = valid_signature("pay_1", "sub_1");
        let result = handler.handle(command("pay_1", &signature, "sub_1")).await;

        assert!(matches!(
            result,
            Err(SubscriptionError::NoSubscriptionOnRecord)
        ));
        assert!(ledger.records().is_empty());
    }

    #[tokio::test]
    async fn ledger_failure_leaves_status_unchanged() {
        let repo = Arc::new(MockUserRepository::with_user(
            subscriber_with_subscription("sub_1"),
        ));
        let ledger = Arc::new(MockPaymentLedger::failing());
        let handler = handler(repo.clone(), ledger);

        let signature = valid_signature("pay_1", "sub_1");
        let result = handler.handle(command("pay_1", &signature, "sub_1")).await;

        assert!(matches!(result, Err(SubscriptionError::Infrastructure(_))));
        let stored = repo.stored(&test_user_id()).unwrap();
        assert_eq!(
            stored.subscription.unwrap().status,
            SubscriptionStatus::Created
        );
    }
}
