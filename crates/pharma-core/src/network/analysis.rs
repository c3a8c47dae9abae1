//! Client for the remote drug analysis service.

use super::client::{extract_domain, HttpClient};
use crate::config::ClientConfig;
use crate::models::DrugResult;
use crate::query::Query;
use crate::Result;
use async_trait::async_trait;
use tracing::{debug, info};

/// Anything that can turn a [`Query`] into analysis results.
///
/// The controller only talks to this trait, so tests can swap in a mock
/// without a network.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Issue exactly one analysis request for `query`.
    async fn analyze(&self, query: &Query) -> Result<Vec<DrugResult>>;
}

/// [`AnalysisClient`] that calls `POST {base_url}/analyze`.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    http: HttpClient,
    endpoint: String,
}

impl HttpAnalysisClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = match config.timeout {
            Some(timeout) => HttpClient::with_timeout(timeout)?,
            None => HttpClient::new()?,
        };

        Ok(Self {
            http,
            endpoint: config.analyze_endpoint(),
        })
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    async fn analyze(&self, query: &Query) -> Result<Vec<DrugResult>> {
        debug!(
            "Requesting analysis of {} drug(s) from {}",
            query.len(),
            extract_domain(&self.endpoint)
        );

        let response = self.http.post_json(&self.endpoint, query).await?;
        let body = response.bytes().await?;
        let results: Vec<DrugResult> = serde_json::from_slice(&body)?;

        info!("Received analysis for {} molecule(s)", results.len());
        Ok(results)
    }
}
