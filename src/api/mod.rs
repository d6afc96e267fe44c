//! HTTP API over the lyrics library
//!
//! Routes:
//! - `GET /` health check
//! - `GET /lyrics` list, optionally filtered by `title` / `artist` substrings
//! - `POST /lyrics` create
//! - `GET|PUT|DELETE /lyrics/:id`

use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::Result;
use crate::services::{LyricsRepository, QueryService};

pub mod handlers;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn LyricsRepository>,
    pub queries: QueryService,
}

impl AppState {
    pub fn new(repository: Arc<dyn LyricsRepository>) -> Self {
        let queries = QueryService::new(repository.clone());
        Self { repository, queries }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health_check))
        .route(
            "/lyrics",
            get(handlers::list_lyrics).post(handlers::create_lyrics),
        )
        .route(
            "/lyrics/:id",
            get(handlers::get_lyrics)
                .put(handlers::update_lyrics)
                .delete(handlers::delete_lyrics),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `address` and serve until Ctrl+C / SIGTERM.
pub async fn serve(state: AppState, address: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(address).await?;
    info!("Lyrics API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(crate::signal_handler::shutdown_signal())
        .await?;

    info!("Lyrics API stopped");
    Ok(())
}
