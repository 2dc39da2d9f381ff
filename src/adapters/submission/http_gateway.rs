//! HTTP Submission Gateway
//!
//! Posts each submission as JSON to a remote submit endpoint. An optional
//! bearer token is kept behind `secrecy` so it never shows up in logs or
//! debug output.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

use crate::domain::dashboard::Submission;
use crate::ports::{GatewayError, SubmissionGateway};

/// Configuration for the HTTP gateway.
#[derive(Debug, Clone)]
pub struct HttpGatewayConfig {
    /// Endpoint receiving `POST` requests with the submission body.
    pub submit_url: String,
    /// Bearer token sent with every request, if any.
    api_token: Option<Secret<String>>,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpGatewayConfig {
    pub fn new(submit_url: impl Into<String>) -> Self {
        Self {
            submit_url: submit_url.into(),
            api_token: None,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(Secret::new(token.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_token(&self) -> Option<&str> {
        self.api_token.as_ref().map(|token| token.expose_secret().as_str())
    }
}

/// Gateway posting submissions to a remote endpoint.
pub struct HttpSubmissionGateway {
    config: HttpGatewayConfig,
    client: Client,
}

impl HttpSubmissionGateway {
    pub fn new(config: HttpGatewayConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::unreachable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl SubmissionGateway for HttpSubmissionGateway {
    async fn submit(&self, submission: &Submission) -> Result<(), GatewayError> {
        let mut request = self.client.post(&self.config.submit_url).json(submission);
        if let Some(token) = self.config.api_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::unreachable(format!(
                    "timed out after {}s",
                    self.config.timeout.as_secs()
                ))
            } else {
                GatewayError::unreachable(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
