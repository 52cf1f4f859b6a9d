//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is read with the `LECTERN`
//! prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use lectern::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod auth;
mod database;
mod email;
mod error;
mod media;
mod payment;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use media::MediaConfig;
pub use payment::PaymentConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (MongoDB connection)
    pub database: DatabaseConfig,

    /// Authentication configuration (JWT)
    pub auth: AuthConfig,

    /// Payment gateway configuration
    pub payment: PaymentConfig,

    /// Email configuration (SMTP contact relay)
    pub email: EmailConfig,

    /// Media storage configuration
    pub media: MediaConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `LECTERN` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `LECTERN__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `LECTERN__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LECTERN")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.payment.validate()?;
        self.email.validate()?;
        self.media.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("LECTERN__DATABASE__URL", "mongodb://localhost:27017");
        env::set_var("LECTERN__DATABASE__NAME", "lectern_test");
        env::set_var("LECTERN__AUTH__JWT_SECRET", "a-jwt-secret-of-decent-length");
        env::set_var("LECTERN__PAYMENT__KEY_ID", "rzp_test_abc");
        env::set_var("LECTERN__PAYMENT__KEY_SECRET", "secret_abc");
        env::set_var("LECTERN__PAYMENT__PLAN_ID", "plan_abc");
        env::set_var("LECTERN__PAYMENT__HMAC_SECRET", "shared_hmac_secret");
        env::set_var("LECTERN__EMAIL__SMTP_HOST", "smtp.example.com");
        env::set_var("LECTERN__EMAIL__SMTP_USERNAME", "mailer");
        env::set_var("LECTERN__EMAIL__SMTP_PASSWORD", "hunter2");
        env::set_var("LECTERN__EMAIL__FROM_EMAIL", "noreply@lectern.dev");
        env::set_var("LECTERN__EMAIL__CONTACT_EMAIL", "hello@lectern.dev");
        env::set_var("LECTERN__MEDIA__BASE_URL", "https://media.example.com/v1");
        env::set_var("LECTERN__MEDIA__API_KEY", "media_key");
    }

    fn clear_env() {
        for key in [
            "LECTERN__DATABASE__URL",
            "LECTERN__DATABASE__NAME",
            "LECTERN__AUTH__JWT_SECRET",
            "LECTERN__PAYMENT__KEY_ID",
            "LECTERN__PAYMENT__KEY_SECRET",
            "LECTERN__PAYMENT__PLAN_ID",
            "LECTERN__PAYMENT__HMAC_SECRET",
            "LECTERN__EMAIL__SMTP_HOST",
            "LECTERN__EMAIL__SMTP_USERNAME",
            "LECTERN__EMAIL__SMTP_PASSWORD",
            "LECTERN__EMAIL__FROM_EMAIL",
            "LECTERN__EMAIL__CONTACT_EMAIL",
            "LECTERN__MEDIA__BASE_URL",
            "LECTERN__MEDIA__API_KEY",
            "LECTERN__SERVER__PORT",
            "LECTERN__SERVER__ENVIRONMENT",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.database.url, "mongodb://localhost:27017");
        assert_eq!(config.database.name, "lectern_test");
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok());
        assert!(result.unwrap().validate().is_ok());
    }

    #[test]
    fn test_server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("LECTERN__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }
}
