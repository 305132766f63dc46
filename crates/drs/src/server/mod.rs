//! The image-upload review page.
//!
//! `GET /` serves a single-input form; `POST /verdict` takes a multipart
//! upload, runs the review pipeline on it and answers with the verdict text.

mod handlers;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};
use drs_core::Referee;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// State shared between request handlers
#[derive(Clone)]
pub(crate) struct ServerState {
    referee: Arc<Referee>,
}

/// Build the router around a shared referee.
pub fn router(referee: Arc<Referee>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/verdict", post(handlers::verdict))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(ServerState { referee })
}

/// Bind `addr` and serve until the process is stopped.
pub async fn run(referee: Referee, addr: &str, max_upload_bytes: usize) -> anyhow::Result<()> {
    let app = router(Arc::new(referee), max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {addr}: {e}"))?;
    tracing::info!("Serving LBW review page on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
