//! Parsing of the raw comma-separated input into a [`Query`].

use crate::error::{PharmaError, Result};
use serde::Serialize;

/// Ordered drug names sent to the analysis service.
///
/// Serializes directly as the request body: `{"drugs": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    drugs: Vec<String>,
}

impl Query {
    /// Split `raw` on commas and trim every token.
    ///
    /// Tokens that are empty after trimming (`"a,,b"`, trailing commas) are
    /// dropped. Input with no remaining names is a validation error.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(PharmaError::empty_query());
        }

        let drugs: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();

        if drugs.is_empty() {
            return Err(PharmaError::empty_query());
        }

        Ok(Self { drugs })
    }

    pub fn drugs(&self) -> &[String] {
        &self.drugs
    }

    pub fn len(&self) -> usize {
        self.drugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drugs.is_empty()
    }
}
