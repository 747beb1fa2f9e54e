// crates/profile/src/infrastructure/api/http/handlers/health_handler.rs

use axum::Json;
use serde_json::{json, Value};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
