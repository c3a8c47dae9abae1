//! Network access to the analysis service.
//!
//! This module provides:
//! - A reqwest wrapper that classifies error responses
//! - The `AnalysisClient` seam and its HTTP implementation

mod analysis;
mod client;

pub use analysis::{AnalysisClient, HttpAnalysisClient};
pub use client::{extract_domain, HttpClient};
