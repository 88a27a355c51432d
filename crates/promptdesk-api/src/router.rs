//! Route table and the layers shared by every route

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handlers::{auth, categories, health, prompts, users};
use crate::middleware::{require_identity, require_user};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Role `user` only
    let user_routes: Router<AppState> = Router::new()
        .route("/api/prompts/{tenant_id}", get(prompts::list_prompts))
        .route_layer(axum::middleware::from_fn_with_state(state.clone(), require_user));

    // Any authenticated identity
    let identity_routes: Router<AppState> = Router::new()
        .route("/users/me", get(users::me))
        .route("/categories", get(categories::list_categories))
        .route("/categories/", get(categories::list_categories))
        .route_layer(axum::middleware::from_fn_with_state(state.clone(), require_identity));

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/auth/token", post(auth::issue_token))
        .merge(user_routes)
        .merge(identity_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
