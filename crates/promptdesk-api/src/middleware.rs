//! Bearer-token guards for protected routes

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use promptdesk_core::domain::Role;

use crate::error::ApiError;
use crate::state::AppState;

/// `Authorization: Bearer <token>` with a case-insensitive scheme. Anything else is no token.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Any authenticated identity. The resolved `Identity` is put in request extensions.
pub async fn require_identity(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    guard(state, request, next, None).await
}

pub async fn require_user(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    guard(state, request, next, Some(Role::User)).await
}

async fn guard(
    state: AppState,
    mut request: Request,
    next: Next,
    required_role: Option<Role>,
) -> Result<Response, ApiError> {
    let identity = state
        .guard
        .authorize(bearer_token(request.headers()), required_role)
        .await?;
    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}
