//! Wire types returned by the analysis service.

use serde::{Deserialize, Serialize};

/// Analysis of a single drug, one per queried name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugResult {
    /// Display name of the molecule.
    pub molecule: String,
    /// Mechanism of action, free text.
    pub moa: String,
    /// Recent development summary, free text.
    pub latest_summary: String,
    pub regulatory_news: Vec<NewsItem>,
    pub clinical_news: Vec<NewsItem>,
    pub commercial_news: Vec<NewsItem>,
}

impl DrugResult {
    /// News items filed under `category`, in response order.
    pub fn news(&self, category: NewsCategory) -> &[NewsItem] {
        match category {
            NewsCategory::Regulatory => &self.regulatory_news,
            NewsCategory::Clinical => &self.clinical_news,
            NewsCategory::Commercial => &self.commercial_news,
        }
    }

    /// Total number of news items across all categories.
    pub fn news_count(&self) -> usize {
        NewsCategory::ALL
            .iter()
            .map(|category| self.news(*category).len())
            .sum()
    }
}

/// A summarized news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl NewsItem {
    /// Link to the source article.
    ///
    /// Only absolute `http` and `https` URLs count. Anything else (empty,
    /// relative, `javascript:`, `data:`) is treated as absent.
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| is_web_url(url))
    }
}

fn is_web_url(raw: &str) -> bool {
    url::Url::parse(raw)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// The three fixed news buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Regulatory,
    Clinical,
    Commercial,
}

impl NewsCategory {
    /// All categories in display order.
    pub const ALL: [NewsCategory; 3] = [
        NewsCategory::Regulatory,
        NewsCategory::Clinical,
        NewsCategory::Commercial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NewsCategory::Regulatory => "regulatory",
            NewsCategory::Clinical => "clinical",
            NewsCategory::Commercial => "commercial",
        }
    }

    /// Heading shown above the category's items.
    pub fn title(&self) -> &'static str {
        match self {
            NewsCategory::Regulatory => "Regulatory Updates",
            NewsCategory::Clinical => "Clinical Developments",
            NewsCategory::Commercial => "Commercial Activity",
        }
    }
}

impl std::fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error body returned by the service on failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Parse an error body, keeping `detail` only when it is a string.
    pub(crate) fn detail_from_bytes(body: &[u8]) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
        match parsed.detail? {
            serde_json::Value::String(detail) => Some(detail),
            _ => None,
        }
    }
}
