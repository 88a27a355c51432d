//! PostgreSQL repository implementations

pub mod identity_repo_impl;
pub mod tenant_repo_impl;
pub mod prompt_repo_impl;
pub mod health_repo_impl;

pub use identity_repo_impl::PgIdentityRepository;
pub use tenant_repo_impl::PgTenantRepository;
pub use prompt_repo_impl::PgPromptRepository;
pub use health_repo_impl::PgHealthRepository;

use promptdesk_core::error::DomainError;
use tracing::error;

pub(crate) fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e: sqlx::Error| {
        error!("Database error {}: {}", context, e);
        DomainError::DatabaseError(e.to_string())
    }
}
