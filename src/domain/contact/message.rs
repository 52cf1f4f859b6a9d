//! Contact form message value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Builds a contact message, validating presence and email shape.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let email = email.into();
        let message = message.into();

        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if message.trim().is_empty() {
            return Err(ValidationError::empty_field("message"));
        }
        if !is_plausible_email(&email) {
            return Err(ValidationError::invalid_format(
                "email",
                "not a valid email address",
            ));
        }

        Ok(Self {
            name,
            email,
            message,
        })
    }

    /// Plain-text body for the relay email.
    pub fn as_mail_body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nMessage: {}",
            self.name, self.email, self.message
        )
    }
}

/// Minimal email shape check: one `@`, non-empty local part, and a dotted
/// domain with no whitespace anywhere.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let (host, tld) = match domain.rsplit_once('.') {
        Some(split) => split,
        None => return false,
    };
    !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_submission() {
        let msg = ContactMessage::new("Ada", "ada@example.com", "Hello!").unwrap();
        assert_eq!(msg.email, "ada@example.com");
    }

    #[test]
    fn rejects_empty_name_and_message() {
        assert!(ContactMessage::new("", "ada@example.com", "Hi").is_err());
        assert!(ContactMessage::new("Ada", "ada@example.com", "  ").is_err());
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in [
            "",
            "plainaddress",
            "@no-local.com",
            "no-domain@",
            "no-dot@domain",
            "two@@ats.com",
            "spaces in@example.com",
            "trailing-dot@example.",
            ".leading@.com",
        ] {
            assert!(
                ContactMessage::new("Ada", email, "Hi").is_err(),
                "should reject {:?}",
                email
            );
        }
    }

    #[test]
    fn mail_body_contains_all_fields() {
        let msg = ContactMessage::new("Ada", "ada@example.com", "Hello!").unwrap();
        let body = msg.as_mail_body();
        assert!(body.contains("Ada"));
        assert!(body.contains("ada@example.com"));
        assert!(body.contains("Hello!"));
    }
}
