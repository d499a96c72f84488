//! Service info and liveness handlers.

use axum::Json;
use serde_json::{Value, json};

/// Handler for `GET /`.
///
/// Returns a short service description.
pub async fn info_handler() -> Json<Value> {
    Json(json!({
        "info": "Larder: an API for storing family recipes."
    }))
}

/// Handler for `GET /health`.
///
/// Liveness probe; returns 200 as long as the process is serving.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
