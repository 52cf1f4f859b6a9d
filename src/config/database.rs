//! Database configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Database configuration (MongoDB)
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// MongoDB connection string
    pub url: String,

    /// Database name
    #[serde(default = "default_name")]
    pub name: String,
}

impl DatabaseConfig {
    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE_URL"));
        }
        if !self.url.starts_with("mongodb://") && !self.url.starts_with("mongodb+srv://") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.name.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE_NAME"));
        }
        Ok(())
    }
}

fn default_name() -> String {
    "lectern".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_mongodb_urls() {
        for url in ["mongodb://localhost:27017", "mongodb+srv://cluster.example.com"] {
            let config = DatabaseConfig {
                url: url.to_string(),
                name: "lectern".to_string(),
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_rejects_non_mongodb_url() {
        let config = DatabaseConfig {
            url: "postgresql://localhost/db".to_string(),
            name: "lectern".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_url() {
        let config = DatabaseConfig {
            url: String::new(),
            name: "lectern".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
