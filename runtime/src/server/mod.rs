//! HTTP surface for the pipeline and the renderer.
//!
//! Routes:
//!
//! - `POST /summarize`: multipart upload (`file`) or JSON source
//! - `POST /download/txt` and `POST /download/pdf`: render `{"text": …}`
//! - `GET /health`

pub mod handlers;

use crate::pipeline::Pipeline;
use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Largest accepted request body (uploads included).
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Pipeline,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/summarize", post(handlers::summarize))
        .route("/download/txt", post(handlers::download_txt))
        .route("/download/pdf", post(handlers::download_pdf))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("reading listener address")?;
    info!("listening on http://{addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")
}
