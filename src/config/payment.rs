//! Payment gateway configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Payment gateway configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfig {
    /// Publishable key id, handed to clients for checkout initialization
    pub key_id: String,

    /// Private API key secret
    pub key_secret: String,

    /// Gateway plan to subscribe users to
    pub plan_id: String,

    /// Shared secret for payment signature verification
    pub hmac_secret: String,

    /// Number of billing cycles scheduled per subscription
    #[serde(default = "default_billing_cycles")]
    pub billing_cycles: u32,
}

impl PaymentConfig {
    /// Check if using gateway test mode
    pub fn is_test_mode(&self) -> bool {
        self.key_id.starts_with("rzp_test_")
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.key_id.is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT_KEY_ID"));
        }
        if self.key_secret.is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT_KEY_SECRET"));
        }
        if self.plan_id.is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT_PLAN_ID"));
        }
        if self.hmac_secret.is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT_HMAC_SECRET"));
        }
        if !self.key_id.starts_with("rzp_") {
            return Err(ValidationError::InvalidGatewayKey);
        }
        if self.billing_cycles == 0 {
            return Err(ValidationError::InvalidBillingCycles);
        }
        Ok(())
    }
}

fn default_billing_cycles() -> u32 {
    12
}
