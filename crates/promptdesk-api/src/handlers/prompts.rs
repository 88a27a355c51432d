// ============================================================================
// PromptDesk API - Prompt Handlers
// File: crates/promptdesk-api/src/handlers/prompts.rs
// ============================================================================

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Extension, Json,
};
use promptdesk_core::domain::Identity;
use promptdesk_shared::PageRequest;
use tracing::debug;
use validator::Validate;

use crate::dto::{PromptPageResponse, PromptQueryParams};
use crate::error::ApiError;
use crate::state::AppState;

/// Prompt page handler - GET /api/prompts/{tenant_id}
pub async fn list_prompts(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    tenant_id: Result<Path<String>, PathRejection>,
    params: Result<Query<PromptQueryParams>, QueryRejection>,
) -> Result<Json<PromptPageResponse>, ApiError> {
    let Path(tenant_id) = tenant_id.map_err(|e| ApiError::Validation(e.body_text()))?;
    let Query(params) = params.map_err(|e| ApiError::Validation(e.body_text()))?;
    params
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    debug!(
        "{} requested prompts for {} (page={}, limit={})",
        identity.username, tenant_id, params.page, params.limit
    );

    let page = state
        .prompts
        .fetch_page(&tenant_id, PageRequest::from(&params))
        .await?;

    Ok(Json(page.into()))
}
