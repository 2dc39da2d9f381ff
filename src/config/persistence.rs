//! Persistence configuration - where autosaved submissions go

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::HttpGatewayConfig;

/// Storage backend for submissions
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceBackend {
    /// Process memory; lost on restart
    #[default]
    Memory,
    /// YAML files under `data_dir`
    File,
    /// Remote submit endpoint
    Http,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersistenceConfig {
    #[serde(default)]
    pub backend: PersistenceBackend,

    /// Endpoint receiving submissions (http backend)
    pub submit_url: Option<String>,

    /// Root directory for the file backend
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Bearer token for the submit endpoint
    pub api_token: Option<Secret<String>>,

    /// Submit request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl PersistenceConfig {
    pub fn validate(&self, production: bool) -> Result<(), ValidationError> {
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.backend != PersistenceBackend::Http {
            return Ok(());
        }

        let url = self
            .submit_url
            .as_deref()
            .ok_or(ValidationError::MissingRequired("persistence.submit_url"))?;
        if production && !url.starts_with("https://") {
            return Err(ValidationError::SubmitUrlMustBeHttps);
        }
        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ValidationError::InvalidSubmitUrl);
        }
        Ok(())
    }

    /// Gateway settings for the http backend.
    pub fn http_gateway(&self) -> Result<HttpGatewayConfig, ValidationError> {
        let url = self
            .submit_url
            .as_deref()
            .ok_or(ValidationError::MissingRequired("persistence.submit_url"))?;

        let mut config = HttpGatewayConfig::new(url)
            .with_timeout(Duration::from_secs(self.request_timeout_secs));
        if let Some(token) = &self.api_token {
            config = config.with_api_token(token.expose_secret().clone());
        }
        Ok(config)
    }
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            backend: PersistenceBackend::default(),
            submit_url: None,
            data_dir: default_data_dir(),
            api_token: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data/submissions")
}

fn default_request_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(url: Option<&str>) -> PersistenceConfig {
        PersistenceConfig {
            backend: PersistenceBackend::Http,
            submit_url: url.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn memory_backend_needs_nothing() {
        assert!(PersistenceConfig::default().validate(true).is_ok());
    }

    #[test]
    fn http_backend_requires_url() {
        assert_eq!(
            http(None).validate(false),
            Err(ValidationError::MissingRequired("persistence.submit_url"))
        );
        assert_eq!(
            http(Some("ftp://example.com")).validate(false),
            Err(ValidationError::InvalidSubmitUrl)
        );
        assert!(http(Some("http://localhost:9000/submit")).validate(false).is_ok());
    }

    #[test]
    fn production_requires_https() {
        assert_eq!(
            http(Some("http://example.com/submit")).validate(true),
            Err(ValidationError::SubmitUrlMustBeHttps)
        );
        assert!(http(Some("https://example.com/submit")).validate(true).is_ok());
    }

    #[test]
    fn token_is_redacted_in_debug_output() {
        let config = PersistenceConfig {
            api_token: Some(Secret::new("tok_live_123".to_string())),
            ..http(Some("https://example.com/submit"))
        };
        assert!(!format!("{:?}", config).contains("tok_live_123"));

        let gateway = config.http_gateway().unwrap();
        assert_eq!(gateway.timeout, Duration::from_secs(10));
    }
}
