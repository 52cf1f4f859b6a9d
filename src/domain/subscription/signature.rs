//! Payment signature verification.
//!
//! The gateway signs every completed payment with
//! `HMAC-SHA256(secret, "<payment_id>|<subscription_id>")`, hex-encoded.
//! This is the single integrity checkpoint of the payment flow: nothing is
//! written to the ledger and no subscription becomes active unless the
//! supplied signature matches the recomputed one.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Verifier for gateway payment signatures.
pub struct PaymentSignatureVerifier {
    /// Shared secret known only to this service and the gateway.
    secret: String,
}

impl PaymentSignatureVerifier {
    /// Creates a new verifier with the given shared secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Computes the hex-encoded signature for a payment/subscription pair.
    ///
    /// Exposed so test fixtures and gateway fakes can produce valid
    /// signatures without duplicating the signing scheme.
    pub fn sign(&self, payment_id: &str, subscription_id: &str) -> String {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payment_id.as_bytes());
        mac.update(b"|");
        mac.update(subscription_id.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Verifies a supplied signature against the recomputed one.
    ///
    /// The supplied value is hex-decoded and compared byte-for-byte in
    /// constant time. Malformed hex counts as a mismatch, not a parse error:
    /// the caller learns nothing beyond "verification failed".
    ///
    /// # Errors
    ///
    /// Returns `VerificationFailed` on any mismatch.
    pub fn verify(
        &self,
        payment_id: &str,
        subscription_id: &str,
        supplied_signature: &str,
    ) -> Result<(), DomainError> {
        let expected = self.sign(payment_id, subscription_id);

        let supplied_bytes = match hex::decode(supplied_signature) {
            Ok(bytes) => bytes,
            Err(_) => {
                return Err(DomainError::new(
                    ErrorCode::VerificationFailed,
                    "Payment not verified, please try again",
                ))
            }
        };
        let expected_bytes = hex::decode(&expected).expect("sign() emits valid hex");

        if !constant_time_compare(&expected_bytes, &supplied_bytes) {
            return Err(DomainError::new(
                ErrorCode::VerificationFailed,
                "Payment not verified, please try again",
            ));
        }

        Ok(())
    }
}

/// Constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TEST_SECRET: &str = "lectern_test_secret_12345";

    #[test]
    fn verify_accepts_correct_signature() {
        let verifier = PaymentSignatureVerifier::new(TEST_SECRET);
        let signature = verifier.sign("pay_1", "sub_1");

        assert!(verifier.verify("pay_1", "sub_1", &signature).is_ok());
    }

    #[test]
    fn verify_rejects_signature_for_different_payment() {
        let verifier = PaymentSignatureVerifier::new(TEST_SECRET);
        let signature = verifier.sign("pay_1", "sub_1");

        let result = verifier.verify("pay_2", "sub_1", &signature);
        assert_eq!(result.unwrap_err().code, ErrorCode::VerificationFailed);
    }

    #[test]
    fn verify_rejects_signature_for_different_subscription() {
        let verifier = PaymentSignatureVerifier::new(TEST_SECRET);
        let signature = verifier.sign("pay_1", "sub_1");

        let result = verifier.verify("pay_1", "sub_2", &signature);
        assert_eq!(result.unwrap_err().code, ErrorCode::VerificationFailed);
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let signer = PaymentSignatureVerifier::new(TEST_SECRET);
        let verifier = PaymentSignatureVerifier::new("some_other_secret");
        let signature = signer.sign("pay_1", "sub_1");

        assert!(verifier.verify("pay_1", "sub_1", &signature).is_err());
    }

    #[test]
    fn verify_rejects_non_hex_signature() {
        let verifier = PaymentSignatureVerifier::new(TEST_SECRET);
        let result = verifier.verify("pay_1", "sub_1", "not hex at all!");
        assert_eq!(result.unwrap_err().code, ErrorCode::VerificationFailed);
    }

    #[test]
    fn verify_rejects_truncated_signature() {
        let verifier = PaymentSignatureVerifier::new(TEST_SECRET);
        let signature = verifier.sign("pay_1", "sub_1");

        assert!(verifier
            .verify("pay_1", "sub_1", &signature[..signature.len() - 2])
            .is_err());
    }

    #[test]
    fn pipe_concatenation_is_unambiguous() {
        // "a|bc" and "ab|c" must not collide.
        let verifier = PaymentSignatureVerifier::new(TEST_SECRET);
        assert_ne!(verifier.sign("a", "bc"), verifier.sign("ab", "c"));
    }

    #[test]
    fn constant_time_compare_handles_length_mismatch() {
        assert!(!constant_time_compare(&[1, 2, 3], &[1, 2, 3, 4]));
        assert!(constant_time_compare(&[1, 2, 3], &[1, 2, 3]));
        assert!(constant_time_compare(&[], &[]));
    }

    proptest! {
        // Flipping any single hex character of a valid signature must cause
        // rejection.
        #[test]
        fn any_single_character_mutation_is_rejected(
            payment in "[a-z0-9_]{1,24}",
            subscription in "[a-z0-9_]{1,24}",
            position in 0usize..64,
            replacement in "[0-9a-f]",
        ) {
            let verifier = PaymentSignatureVerifier::new(TEST_SECRET);
            let signature = verifier.sign(&payment, &subscription);

            let mut mutated: Vec<char> = signature.chars().collect();
            prop_assume!(mutated[position].to_string() != replacement);
            mutated[position] = replacement.chars().next().unwrap();
            let mutated: String = mutated.into_iter().collect();

            prop_assert!(verifier.verify(&payment, &subscription, &mutated).is_err());
        }

        #[test]
        fn correct_signature_always_verifies(
            payment in "[a-z0-9_]{1,24}",
            subscription in "[a-z0-9_]{1,24}",
        ) {
            let verifier = PaymentSignatureVerifier::new(TEST_SECRET);
            let signature = verifier.sign(&payment, &subscription);
            prop_assert!(verifier.verify(&payment, &subscription, &signature).is_ok());
        }
    }
}
