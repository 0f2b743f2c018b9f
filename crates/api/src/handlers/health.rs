//! Liveness endpoint.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::state::AppState;

/// `GET /health` -- report process and database health.
pub async fn health(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let database = match planhub_db::health_check(&state.pool).await {
        Ok(()) => "ok",
        Err(err) => {
            tracing::error!(error = %err, "Database health check failed");
            "unavailable"
        }
    };
    Ok(Json(json!({
        "status": "ok",
        "database": database,
    })))
}
