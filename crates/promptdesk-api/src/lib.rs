//! # PromptDesk API
//!
//! HTTP handlers, bearer-token middleware, DTOs and the error-to-status mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
