//! SMTP mailer adapter.
//!
//! Relays contact form submissions over an authenticated SMTP connection
//! using `lettre`'s async Tokio transport.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::EmailConfig;
use crate::domain::contact::ContactMessage;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::Mailer;

/// SMTP-backed `Mailer`.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_header: String,
    contact_email: String,
}

impl SmtpMailer {
    /// Build a mailer from configuration.
    ///
    /// # Errors
    ///
    /// Returns `MailerError` if the SMTP relay cannot be constructed.
    pub fn new(config: &EmailConfig) -> Result<Self, DomainError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| mailer_error(format!("Invalid SMTP relay: {}", e)))?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from_header: config.from_header(),
            contact_email: config.contact_email.clone(),
        })
    }
}

fn mailer_error(message: impl Into<String>) -> DomainError {
    DomainError::new(ErrorCode::MailerError, message)
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_contact_message(&self, message: &ContactMessage) -> Result<(), DomainError> {
        let email = Message::builder()
            .from(
                self.from_header
                    .parse()
                    .map_err(|e| mailer_error(format!("Invalid from address: {}", e)))?,
            )
            .reply_to(
                message
                    .email
                    .parse()
                    .map_err(|e| mailer_error(format!("Invalid reply-to address: {}", e)))?,
            )
            .to(self
                .contact_email
                .parse()
                .map_err(|e| mailer_error(format!("Invalid recipient address: {}", e)))?)
            .subject("New Contact Form Submission")
            .header(ContentType::TEXT_PLAIN)
            .body(message.as_mail_body())
            .map_err(|e| mailer_error(format!("Failed to build email: {}", e)))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| mailer_error(format!("SMTP send failed: {}", e)))?;

        tracing::debug!(from = %message.email, "contact message relayed");
        Ok(())
    }
}
