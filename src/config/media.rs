//! Media storage configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Media storage configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaConfig {
    /// Base URL of the storage API
    pub base_url: String,

    /// API key for the storage service
    pub api_key: String,
}

impl MediaConfig {
    /// Validate media configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("MEDIA_BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidMediaBaseUrl);
        }
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("MEDIA_API_KEY"));
        }
        Ok(())
    }
}
