use crate::dtos::{now_timestamp, HealthResponse, ReadinessResponse};
use crate::startup::AppState;
use axum::{extract::State, Json};

/// Liveness. Healthy even when the guide failed to load.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: now_timestamp(),
        service: state.config.service_name.clone(),
    })
}

/// Readiness. The placeholder document is still servable, so this never
/// reports unready; `documentLoaded` tells the two states apart.
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    Json(ReadinessResponse {
        status: "ready".to_string(),
        document_loaded: state.document.is_loaded(),
    })
}
