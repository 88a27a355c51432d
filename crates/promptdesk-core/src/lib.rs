//! # PromptDesk Core
//!
//! Domain entities, repository ports and services: authentication, access
//! guarding and deadline-bounded prompt retrieval.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::{AccessError, AuthError, DomainError, RetrievalError};
