//! Single-page HTML rendering.
//!
//! The page template is compiled once into a [`HtmlRenderer`]. Handlebars
//! escapes every interpolated value, so service text never reaches the page
//! as markup.

use super::{sections, DrugSection};
use crate::config::UiConfig;
use crate::error::Result;
use crate::state::AnalyzerState;
use handlebars::Handlebars;
use serde::Serialize;

const PAGE_TEMPLATE_NAME: &str = "page";
const PAGE_TEMPLATE: &str = include_str!("templates/page.hbs");

/// Everything the page template needs.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub title: &'static str,
    pub input_label: &'static str,
    pub placeholder: &'static str,
    pub submit_label: &'static str,
    pub input: String,
    pub loading: bool,
    pub error: Option<String>,
    pub sections: Vec<DrugSection>,
}

impl PageView {
    pub fn from_state(state: &AnalyzerState) -> Self {
        Self {
            title: UiConfig::APP_TITLE,
            input_label: UiConfig::INPUT_LABEL,
            placeholder: UiConfig::INPUT_PLACEHOLDER,
            submit_label: UiConfig::SUBMIT_LABEL,
            input: state.input().to_string(),
            loading: state.is_loading(),
            error: state.error().map(String::from),
            sections: sections(state.results()),
        }
    }
}

/// Compiled page template.
pub struct HtmlRenderer {
    registry: Handlebars<'static>,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        registry.register_template_string(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { registry })
    }

    /// Render the full page for `view`.
    pub fn render_page(&self, view: &PageView) -> Result<String> {
        Ok(self.registry.render(PAGE_TEMPLATE_NAME, view)?)
    }

    /// Render the page for the current state.
    pub fn render_state(&self, state: &AnalyzerState) -> Result<String> {
        self.render_page(&PageView::from_state(state))
    }
}
