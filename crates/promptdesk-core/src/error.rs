//! Domain errors

use thiserror::Error;

use crate::domain::Role;

/// Failures raised by repositories and provisioning.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Tenant not found: {0}")]
    TenantNotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Login outcome. Unknown user and wrong password share one variant.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Internal server error")]
    Internal(String),
}

#[derive(Error, Debug)]
pub enum AccessError {
    #[error("Could not validate credentials")]
    Unauthenticated,

    #[error("Operation requires role {required}")]
    Forbidden { required: Role },

    #[error("Internal server error")]
    Internal(String),
}

/// Client-visible messages never include the collaborator diagnostic in `Internal`.
#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("Invalid or missing company_id")]
    InvalidTenant,

    #[error("No prompts found for this company")]
    NotFound,

    #[error("Request timed out")]
    DeadlineExceeded,

    #[error("Internal server error")]
    Internal(String),
}
