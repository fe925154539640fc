pub mod config;
pub mod controllers;
pub mod error;
pub mod middleware;
pub mod models;

use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use models::Theater;

// Shared state для всего приложения
pub struct AppState {
    // Один замок на весь зал: проверка и изменение места атомарны
    pub theater: Mutex<Theater>,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        let theater = Theater::new(config.theater.rows, config.theater.columns);
        Arc::new(Self {
            theater: Mutex::new(theater),
            config,
        })
    }
}

/// Assembles the full HTTP surface over the given state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Theater API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .merge(controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
