use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /healthz
/// Reports liveness and the configured model identifier.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "ok": true,
        "model": state.config.model
    }))
}
