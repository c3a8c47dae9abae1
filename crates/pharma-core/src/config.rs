//! Centralized configuration for the PharmaIntelligence client.
//!
//! Constants for network behaviour, user-facing messages and page labels,
//! plus [`ClientConfig`], which locates the analysis service.

use crate::error::{PharmaError, Result};
use std::time::Duration;
use url::Url;

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const ANALYZE_PATH: &'static str = "/analyze";
    pub const USER_AGENT: &'static str = "PharmaIntelligence/0.1";
    pub const API_URL_ENV_VAR: &'static str = "PHARMA_API_URL";
    pub const TIMEOUT_ENV_VAR: &'static str = "PHARMA_API_TIMEOUT_SECS";
}

/// User-facing messages.
pub struct Messages;

impl Messages {
    pub const EMPTY_QUERY: &'static str = "Please enter at least one drug name";
    pub const REQUEST_FAILED: &'static str = "Failed to analyze drugs. Please try again.";
}

/// Page titles and labels.
pub struct UiConfig;

impl UiConfig {
    pub const APP_TITLE: &'static str = "PharmaIntelligence Analyzer";
    pub const INPUT_LABEL: &'static str = "Enter drug names (comma-separated)";
    pub const INPUT_PLACEHOLDER: &'static str = "Example: Adalimumab, Pembrolizumab";
    pub const SUBMIT_LABEL: &'static str = "Generate Analysis";
    pub const MOA_TITLE: &'static str = "Mechanism of Action";
    pub const SUMMARY_TITLE: &'static str = "Latest Development Summary";
    pub const NEWS_TITLE: &'static str = "News Analysis";
    pub const SOURCE_LINK_LABEL: &'static str = "Source Article";
}

/// Location and transport settings for the analysis service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the analysis service.
    pub base_url: Url,
    /// Per-request timeout. `None` waits for the service indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a config for the given base URL with no timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim()).map_err(|e| PharmaError::Config {
            message: format!("Invalid analysis service URL '{}': {}", base_url, e),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(PharmaError::Config {
                message: format!("Analysis service URL cannot be a base: {}", base_url),
            });
        }

        Ok(Self {
            base_url,
            timeout: None,
        })
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read the config from `PHARMA_API_URL` and `PHARMA_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(NetworkConfig::API_URL_ENV_VAR).map_err(|_| {
            PharmaError::Config {
                message: format!("{} is not set", NetworkConfig::API_URL_ENV_VAR),
            }
        })?;

        let timeout = match std::env::var(NetworkConfig::TIMEOUT_ENV_VAR) {
            Ok(raw) => Some(parse_timeout_secs(&raw)?),
            Err(_) => None,
        };

        let mut config = Self::new(&base_url)?;
        config.timeout = timeout;
        Ok(config)
    }

    /// Full URL of the analyze endpoint.
    ///
    /// Appends the path to the base verbatim, so a base with a path prefix
    /// (`https://host/api`) keeps it.
    pub fn analyze_endpoint(&self) -> String {
        format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            NetworkConfig::ANALYZE_PATH
        )
    }
}

fn parse_timeout_secs(raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| PharmaError::Config {
            message: format!(
                "{} must be a whole number of seconds, got '{}': {}",
                NetworkConfig::TIMEOUT_ENV_VAR,
                raw,
                e
            ),
        })
}
