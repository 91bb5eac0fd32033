use axum::Json;
use serde_json::{json, Value};

/// Liveness probe; does not touch the database or asset store.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
