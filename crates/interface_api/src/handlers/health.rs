//! Health check handler

use axum::Json;
use serde_json::{json, Value};

/// Liveness endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
