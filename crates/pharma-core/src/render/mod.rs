//! Presentation of analysis results.
//!
//! [`sections`] maps results onto a small view model of collapsible
//! sections, text panels and news groups. The back ends render that model:
//! - [`text`] for the terminal
//! - [`html`] for the single-page interface

pub mod html;
pub mod text;

use crate::config::UiConfig;
use crate::models::{DrugResult, NewsCategory, NewsItem};
use serde::Serialize;

pub use html::{HtmlRenderer, PageView};
pub use text::{render_text, TextOptions};

/// Browsing context external links open in.
pub const LINK_TARGET: &str = "_blank";
/// Link relation that keeps the opener and referrer hidden from the target.
pub const LINK_REL: &str = "noopener noreferrer";

/// One collapsible section per molecule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrugSection {
    pub label: String,
    pub expanded: bool,
    pub panels: Vec<TextPanel>,
    pub news_title: &'static str,
    pub news: Vec<NewsGroup>,
}

/// A titled block of free text, whitespace kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextPanel {
    pub title: &'static str,
    pub body: String,
}

/// A category heading and its items. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsGroup {
    pub category: NewsCategory,
    pub title: &'static str,
    pub entries: Vec<NewsEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsEntry {
    pub summary: String,
    pub link: Option<ExternalLink>,
}

/// Link to a source article, opened in a new context without a referrer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    pub href: String,
    pub label: &'static str,
    pub target: &'static str,
    pub rel: &'static str,
}

impl ExternalLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: UiConfig::SOURCE_LINK_LABEL,
            target: LINK_TARGET,
            rel: LINK_REL,
        }
    }
}

/// Build one collapsed section per result, in response order.
pub fn sections(results: &[DrugResult]) -> Vec<DrugSection> {
    results.iter().map(section).collect()
}

/// Build the section for a single result.
pub fn section(result: &DrugResult) -> DrugSection {
    DrugSection {
        label: result.molecule.clone(),
        expanded: false,
        panels: vec![
            TextPanel {
                title: UiConfig::MOA_TITLE,
                body: result.moa.clone(),
            },
            TextPanel {
                title: UiConfig::SUMMARY_TITLE,
                body: result.latest_summary.clone(),
            },
        ],
        news_title: UiConfig::NEWS_TITLE,
        news: NewsCategory::ALL
            .iter()
            .map(|&category| NewsGroup {
                category,
                title: category.title(),
                entries: result.news(category).iter().map(entry).collect(),
            })
            .collect(),
    }
}

fn entry(item: &NewsItem) -> NewsEntry {
    NewsEntry {
        summary: item.summary.clone(),
        link: item.link().map(ExternalLink::new),
    }
}
