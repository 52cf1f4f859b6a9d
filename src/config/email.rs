//! Email configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration (SMTP)
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP port
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// SMTP username
    pub smtp_username: String,

    /// SMTP password
    pub smtp_password: String,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From display name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Recipient for contact form submissions
    pub contact_email: String,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.smtp_host.is_empty() {
            return Err(ValidationError::MissingRequired("SMTP_HOST"));
        }
        if self.smtp_username.is_empty() {
            return Err(ValidationError::MissingRequired("SMTP_USERNAME"));
        }
        if self.smtp_password.is_empty() {
            return Err(ValidationError::MissingRequired("SMTP_PASSWORD"));
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        if !self.contact_email.contains('@') {
            return Err(ValidationError::InvalidContactEmail);
        }
        Ok(())
    }
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_email() -> String {
    "noreply@lectern.dev".to_string()
}

fn default_from_name() -> String {
    "Lectern".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> EmailConfig {
        EmailConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 587,
            smtp_username: "mailer".to_string(),
            smtp_password: "hunter2".to_string(),
            from_email: "noreply@lectern.dev".to_string(),
            from_name: "Lectern".to_string(),
            contact_email: "hello@lectern.dev".to_string(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_from_header() {
        assert_eq!(valid_config().from_header(), "Lectern <noreply@lectern.dev>");
    }

    #[test]
    fn test_missing_host_rejected() {
        let config = EmailConfig {
            smtp_host: String::new(),
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_contact_email_rejected() {
        let config = EmailConfig {
            contact_email: "not-an-email".to_string(),
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }
}
