use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use std::sync::Arc;

use crate::{
    error::{ApiError, TheaterError},
    models::{PurchaseReceipt, PurchaseRequest, ReturnReceipt, ReturnRequest},
    AppState,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/purchase", post(purchase))
        .route("/return", post(return_ticket))
}

/* ---------- helpers ---------- */

// Любая ошибка разбора тела - это "Wrong body format"
fn body_or_malformed<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::debug!("body rejected: {}", rejection.body_text());
        ApiError::from(TheaterError::MalformedRequest)
    })
}

// POST /purchase
async fn purchase(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PurchaseRequest>, JsonRejection>,
) -> Result<Json<PurchaseReceipt>, ApiError> {
    let order = body_or_malformed(payload)?;
    let receipt = state.theater.lock().await.purchase(&order)?;
    Ok(Json(receipt))
}

// POST /return
async fn return_ticket(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ReturnRequest>, JsonRejection>,
) -> Result<Json<ReturnReceipt>, ApiError> {
    let request = body_or_malformed(payload)?;
    let receipt = state.theater.lock().await.return_ticket(&request)?;
    Ok(Json(receipt))
}
