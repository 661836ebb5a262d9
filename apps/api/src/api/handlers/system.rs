use axum::Json;
use serde_json::{json, Value};

/// Welcome message
///
/// GET /
pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": "VAMO COLORADO!!" }))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
