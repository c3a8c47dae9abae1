//! Thin HTTP client over reqwest.
//!
//! Provides:
//! - Optional per-request timeout
//! - User-agent management
//! - Classification of non-2xx responses into [`PharmaError::Api`]

use crate::config::NetworkConfig;
use crate::models::ErrorBody;
use crate::{PharmaError, Result};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// HTTP client used for all calls to the analysis service.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Option<Duration>,
}

impl HttpClient {
    /// Create a client that waits indefinitely for responses.
    pub fn new() -> Result<Self> {
        Self::build(None)
    }

    /// Create a client with a per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(NetworkConfig::USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| PharmaError::Network {
            message: format!("Failed to create HTTP client: {}", e),
            source: Some(e),
        })?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// POST a JSON body and return the response if its status is 2xx.
    pub async fn post_json<T: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<Response> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.send_error("POST", url, e))?;

        debug!("POST {} -> {}", url, response.status());
        self.check_response_status(response).await
    }

    // Internal methods

    fn send_error(&self, method: &str, url: &str, err: reqwest::Error) -> PharmaError {
        if err.is_timeout() {
            return PharmaError::Timeout(self.timeout.unwrap_or_default());
        }
        PharmaError::Network {
            message: format!("{} {} failed: {}", method, url, err),
            source: Some(err),
        }
    }

    async fn check_response_status(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        // An unreadable error body just means no detail
        let body = response.bytes().await.unwrap_or_default();
        Err(PharmaError::Api {
            status: status.as_u16(),
            detail: ErrorBody::detail_from_bytes(&body),
        })
    }
}

/// Extract the host from a URL, for log lines.
pub fn extract_domain(url: &str) -> String {
    url::Url::parse(url)
        .map(|u| u.host_str().unwrap_or("unknown").to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}
