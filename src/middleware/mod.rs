use axum::{extract::FromRequestParts, http::request::Parts};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;

/// Proof that the caller presented the admin password.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

#[derive(Debug, Default, Deserialize)]
struct AdminQuery {
    password: Option<String>,
}

// Пароль администратора передается в query-параметре `password`
impl FromRequestParts<Arc<crate::AppState>> for AdminAccess {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<crate::AppState>,
    ) -> Result<Self, Self::Rejection> {
        let query: AdminQuery = parts
            .uri
            .query()
            .map(serde_urlencoded::from_str::<AdminQuery>)
            .transpose()
            .map_err(|_| ApiError::Unauthorized)?
            .unwrap_or_default();

        match query.password {
            Some(password) if password == state.config.admin.password => Ok(AdminAccess),
            _ => Err(ApiError::Unauthorized),
        }
    }
}
