//! SubmitContactFormHandler - relays a validated contact message by email.

use std::sync::Arc;

use crate::domain::contact::ContactMessage;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::Mailer;

/// Command carrying a raw contact form submission.
#[derive(Debug, Clone)]
pub struct SubmitContactFormCommand {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Handler validating and relaying contact form submissions.
pub struct SubmitContactFormHandler {
    mailer: Arc<dyn Mailer>,
}

impl SubmitContactFormHandler {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    pub async fn handle(&self, cmd: SubmitContactFormCommand) -> Result<(), DomainError> {
        let message = ContactMessage::new(cmd.name, cmd.email, cmd.message)
            .map_err(|e| DomainError::new(ErrorCode::ValidationFailed, e.to_string()))?;

        self.mailer
            .send_contact_message(&message)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "contact form relay failed");
                DomainError::new(
                    ErrorCode::MailerError,
                    "An error occurred while submitting the form",
                )
            })?;

        Ok(())
    }
}
