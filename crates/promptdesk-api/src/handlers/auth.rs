// ============================================================================
// PromptDesk API - Auth Handlers
// File: crates/promptdesk-api/src/handlers/auth.rs
// ============================================================================
//! Password-grant token issuance

use axum::{
    extract::{rejection::FormRejection, State},
    Form, Json,
};
use promptdesk_shared::constants::TOKEN_TYPE_BEARER;
use tracing::info;

use crate::dto::{TokenRequest, TokenResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Token handler - POST /auth/token
pub async fn issue_token(
    State(state): State<AppState>,
    form: Result<Form<TokenRequest>, FormRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Form(form) = form.map_err(|e| ApiError::Validation(e.body_text()))?;

    let identity = state.auth.authenticate(&form.username, &form.password).await?;

    let access_token = state
        .codec
        .issue(&identity.username)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    info!("Access token issued for {}", identity.username);
    Ok(Json(TokenResponse {
        access_token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
    }))
}
