use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::{models::AvailableSeats, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/seats", get(get_available_seats))
}

// GET /seats
async fn get_available_seats(State(state): State<Arc<AppState>>) -> Json<AvailableSeats> {
    let theater = state.theater.lock().await;
    Json(theater.list_available())
}
