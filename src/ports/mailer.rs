//! Mailer port.

use async_trait::async_trait;

use crate::domain::contact::ContactMessage;
use crate::domain::foundation::DomainError;

/// Port for outbound email delivery.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Relay a contact form submission to the configured recipient.
    async fn send_contact_message(&self, message: &ContactMessage) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailer_is_object_safe() {
        fn _accepts_dyn(_mailer: &dyn Mailer) {}
    }
}
