//! Health check endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::DbError;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// GET /healthz - round-trip a trivial query to confirm store connectivity
async fn healthz(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, ApiError> {
    sqlx::query("SELECT 1")
        .execute(&state.pool)
        .await
        .map_err(DbError::from)?;

    Ok(Json(HealthResponse { ok: true }))
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/healthz", get(healthz))
}
