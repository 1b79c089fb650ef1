use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/health
/// Returns a simple status object with service version and remote-path status.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "ReadRite API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "remote_enabled": state.resolver.remote_enabled()
    }))
}
