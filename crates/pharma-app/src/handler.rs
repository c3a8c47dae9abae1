//! Page request handlers.

use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use pharma_core::{AnalysisClient, PharmaError};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Form posted by the page's trigger.
#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub drugs: String,
}

/// Health check endpoint.
pub async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// Render the page for the current state.
pub async fn handle_page<C: AnalysisClient>(State(state): State<Arc<AppState<C>>>) -> Response {
    render(&state)
}

/// Take the submitted input, dispatch it, and render the outcome.
///
/// The dispatch runs in its own task, so a client that disconnects while
/// waiting does not cancel the request; its result still lands in the
/// shared state. While a dispatch is in flight the submission is ignored and
/// the loading page is returned as-is.
pub async fn handle_analyze<C: AnalysisClient + 'static>(
    State(state): State<Arc<AppState<C>>>,
    Form(form): Form<AnalyzeForm>,
) -> Response {
    let task = tokio::spawn({
        let state = state.clone();
        async move { state.analyzer.analyze(&form.drugs).await }
    });

    match task.await {
        Ok(Ok(results)) => debug!("Page dispatch produced {} result(s)", results.len()),
        Ok(Err(PharmaError::DispatchInProgress)) => {
            debug!("Submission ignored, dispatch already in flight")
        }
        Ok(Err(e)) if e.is_request_error() => warn!("Page dispatch failed: {}", e),
        Ok(Err(e)) => debug!("Page dispatch rejected: {}", e),
        Err(e) => error!("Page dispatch task failed: {}", e),
    }

    render(&state)
}

fn render<C: AnalysisClient>(state: &AppState<C>) -> Response {
    match state.renderer.render_state(&state.analyzer.snapshot()) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
