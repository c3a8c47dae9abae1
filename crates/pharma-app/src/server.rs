//! HTTP server implementation using Axum.

use crate::handler::{handle_analyze, handle_health, handle_page};
use axum::{
    routing::{get, post},
    Router,
};
use pharma_core::{AnalysisClient, Analyzer, HtmlRenderer};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Application state shared across handlers.
///
/// One controller backs the page, so every visitor sees the same state.
pub struct AppState<C> {
    pub analyzer: Analyzer<C>,
    pub renderer: HtmlRenderer,
}

/// Build the page router.
pub fn router<C: AnalysisClient + 'static>(state: Arc<AppState<C>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_page::<C>))
        .route("/analyze", post(handle_analyze::<C>))
        .route("/health", get(handle_health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the page server.
///
/// Returns the actual address the server is bound to (useful when port=0).
pub async fn start_server<C: AnalysisClient + 'static>(
    state: AppState<C>,
    host: &str,
    port: u16,
) -> anyhow::Result<SocketAddr> {
    let app = router(Arc::new(state));

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("Server listening on {}", actual_addr);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    });

    Ok(actual_addr)
}
