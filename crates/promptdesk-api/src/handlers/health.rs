use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::warn;

use crate::dto::MessageResponse;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to PromptDesk".to_string(),
    })
}

pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Storage ping, bounded by the retrieval deadline.
pub async fn readiness_check(State(state): State<AppState>) -> StatusCode {
    match tokio::time::timeout(state.prompts.deadline(), state.health.ping()).await {
        Ok(Ok(())) => StatusCode::OK,
        Ok(Err(e)) => {
            warn!("Readiness check failed: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        }
        Err(_) => {
            warn!("Readiness check timed out");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
