use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "Success",
        "message": "Backend service (request-relay) is running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
