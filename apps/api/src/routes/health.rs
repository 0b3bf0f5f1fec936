use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and registered summary builders.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "careerpath-api",
        "summary_builders": state.registry.keys(),
        "sessions": state.sessions.len().await,
        "session_idle_ttl_secs": state.config.session_idle_ttl.as_secs(),
    }))
}
