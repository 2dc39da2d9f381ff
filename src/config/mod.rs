//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MENTOR_DIAGNOSTIC` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use mentor_diagnostic::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod autosave;
mod error;
mod persistence;
mod scoring;
mod server;

pub use autosave::AutosaveSettings;
pub use error::{ConfigError, ValidationError};
pub use persistence::{PersistenceBackend, PersistenceConfig};
pub use scoring::ScoringConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// development server with in-memory persistence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Autosave debounce timing
    #[serde(default)]
    pub autosave: AutosaveSettings,

    /// Positional scoring widgets
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Submission storage
    #[serde(default)]
    pub persistence: PersistenceConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MENTOR_DIAGNOSTIC` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MENTOR_DIAGNOSTIC__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `MENTOR_DIAGNOSTIC__PERSISTENCE__BACKEND=file` -> `persistence.backend = file`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MENTOR_DIAGNOSTIC")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.autosave.validate()?;
        self.scoring.validate()?;
        self.persistence.validate(self.is_production())?;
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
        "MENTOR_DIAGNOSTIC__SERVER__PORT",
        "MENTOR_DIAGNOSTIC__SERVER__ENVIRONMENT",
        "MENTOR_DIAGNOSTIC__AUTOSAVE__QUIET_PERIOD_MS",
        "MENTOR_DIAGNOSTIC__PERSISTENCE__BACKEND",
        "MENTOR_DIAGNOSTIC__PERSISTENCE__SUBMIT_URL",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.autosave.quiet_period_ms, 2000);
        assert_eq!(config.persistence.backend, PersistenceBackend::Memory);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nested_values_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MENTOR_DIAGNOSTIC__SERVER__PORT", "3000");
        env::set_var("MENTOR_DIAGNOSTIC__AUTOSAVE__QUIET_PERIOD_MS", "750");
        env::set_var("MENTOR_DIAGNOSTIC__PERSISTENCE__BACKEND", "file");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.autosave.quiet_period_ms, 750);
        assert_eq!(config.persistence.backend, PersistenceBackend::File);
    }

    #[test]
    fn test_http_backend_in_production_requires_https() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MENTOR_DIAGNOSTIC__SERVER__ENVIRONMENT", "production");
        env::set_var("MENTOR_DIAGNOSTIC__PERSISTENCE__BACKEND", "http");
        env::set_var("MENTOR_DIAGNOSTIC__PERSISTENCE__SUBMIT_URL", "http://example.com");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert_eq!(config.validate(), Err(ValidationError::SubmitUrlMustBeHttps));
    }
}
