//! Health check endpoint

use axum::extract::State;
use shared::ApiResponse;

use crate::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> ApiResponse<serde_json::Value> {
    ApiResponse::success(serde_json::json!({
        "status": "ok",
        "service": "hotel-service",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.environment,
        "seeded": state.is_seeded(),
    }))
}
