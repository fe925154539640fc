//! Admin statistics for the hall: income and seat counts.
//!
//! Guarded by [`AdminAccess`]; the theater itself knows nothing about
//! passwords.

use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;

use crate::{middleware::AdminAccess, models::TheaterStats, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/stats", post(get_stats))
}

/// POST /stats?password=...
async fn get_stats(
    State(state): State<Arc<AppState>>,
    _admin: AdminAccess,
) -> Json<TheaterStats> {
    let stats = state.theater.lock().await.stats();

    tracing::info!(
        "Статистика зала: выручка {}, продано {}, свободно {}",
        stats.current_income,
        stats.number_of_purchased_tickets,
        stats.number_of_available_seats
    );

    Json(stats)
}
