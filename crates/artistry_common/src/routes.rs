// --- File: crates/artistry_common/src/routes.rs ---

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

/// Liveness probe.
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Creates a router containing routes shared by every deployment.
pub fn routes() -> Router {
    Router::new().route("/health", get(health))
}
