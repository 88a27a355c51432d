use axum::{Extension, Json};
use promptdesk_core::domain::Identity;

use crate::dto::MeResponse;

/// GET /users/me
pub async fn me(Extension(identity): Extension<Identity>) -> Json<MeResponse> {
    Json(MeResponse { username: identity.username })
}
