//! Pharma Core - Headless client for the PharmaIntelligence drug analysis service.
//!
//! This crate collects comma-separated drug names, sends them to the remote
//! analysis service in a single request, and renders the per-drug results
//! (mechanism of action, development summary and categorized news). It has
//! no HTTP server of its own; the `pharma-app` crate wraps it in a CLI and a
//! single-page web interface.
//!
//! # Example
//!
//! ```rust,ignore
//! use pharma_core::{Analyzer, ClientConfig, HttpAnalysisClient};
//!
//! #[tokio::main]
//! async fn main() -> pharma_core::Result<()> {
//!     let config = ClientConfig::from_env()?;
//!     let analyzer = Analyzer::new(HttpAnalysisClient::new(&config)?);
//!
//!     let results = analyzer.analyze("Adalimumab, Pembrolizumab").await?;
//!     println!("Analyzed {} molecules", results.len());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod network;
pub mod query;
pub mod render;
pub mod state;

// Re-export commonly used types
pub use config::{ClientConfig, Messages};
pub use controller::Analyzer;
pub use error::{PharmaError, Result};
pub use models::{DrugResult, NewsCategory, NewsItem};
pub use network::{AnalysisClient, HttpAnalysisClient};
pub use query::Query;
pub use render::{render_text, sections, HtmlRenderer, PageView, TextOptions};
pub use state::{AnalyzerState, DispatchTicket, RequestStatus};
