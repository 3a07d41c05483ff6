//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `SWIFTEATZ` prefix and
//! nested values use double underscores as separators. Every section has
//! defaults, so an empty environment yields a working development config.
//!
//! # Example
//!
//! ```no_run
//! use swifteatz::config::AppConfig;
//!
//! # fn main() -> Result<(), swifteatz::config::ConfigError> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//!
//! println!("Server running on {}", config.server.socket_addr()?);
//! # Ok(())
//! # }
//! ```

mod admin;
mod affiliate;
mod error;
mod features;
mod server;

pub use admin::AdminConfig;
pub use affiliate::AffiliateConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Affiliate partner ids and campaign source
    #[serde(default)]
    pub affiliate: AffiliateConfig,

    /// Admin allow-list
    #[serde(default)]
    pub admin: AdminConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SWIFTEATZ` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SWIFTEATZ__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SWIFTEATZ__AFFILIATE__AMAZON_TAG=...` -> `affiliate.amazon_tag = ...`
    /// - `SWIFTEATZ__ADMIN__EMAILS=a@x.com,b@y.com` -> `admin.emails = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SWIFTEATZ")
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
        self.affiliate.validate()?;
        self.admin.validate()?;
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

    const VARS: &[&str] = &[
        "SWIFTEATZ__SERVER__PORT",
        "SWIFTEATZ__SERVER__ENVIRONMENT",
        "SWIFTEATZ__AFFILIATE__AMAZON_TAG",
        "SWIFTEATZ__AFFILIATE__UTM_SOURCE",
        "SWIFTEATZ__ADMIN__EMAILS",
        "SWIFTEATZ__FEATURES__JSON_LOGS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_empty_environment_loads_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.affiliate.utm_source, "swifteatz");
        assert_eq!(config.admin.emails_list(), vec!["baron@dossx.com"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SWIFTEATZ__SERVER__PORT", "3000");
        env::set_var("SWIFTEATZ__SERVER__ENVIRONMENT", "production");
        env::set_var("SWIFTEATZ__AFFILIATE__AMAZON_TAG", "swifteatz-20");
        env::set_var("SWIFTEATZ__ADMIN__EMAILS", "ops@example.com,baron@dossx.com");
        env::set_var("SWIFTEATZ__FEATURES__JSON_LOGS", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
        assert_eq!(config.affiliate.amazon_tag.as_deref(), Some("swifteatz-20"));
        assert_eq!(config.admin.emails_list().len(), 2);
        assert!(config.features.json_logs);
    }

    #[test]
    fn test_validate_rejects_blank_utm_source() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SWIFTEATZ__AFFILIATE__UTM_SOURCE", " ");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::EmptyUtmSource));
    }
}
