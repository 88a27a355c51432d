use axum::{Extension, Json};
use promptdesk_core::domain::Identity;

use crate::dto::CategoriesResponse;

/// GET /categories
pub async fn list_categories(Extension(identity): Extension<Identity>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        message: "Categories list".to_string(),
        user: identity.username,
    })
}
