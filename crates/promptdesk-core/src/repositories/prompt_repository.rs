//! Prompt repository trait (port)

use async_trait::async_trait;

use crate::domain::PromptRow;
use crate::error::DomainError;

/// Read side of the tenant prompt store.
///
/// Implementations must be cancel-safe: the retrieval service drops these
/// futures when its deadline fires.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PromptRepository: Send + Sync {
    async fn count_by_tenant(&self, tenant_id: &str) -> Result<i64, DomainError>;

    /// Rows ordered by ascending prompt id.
    async fn find_page_by_tenant(
        &self,
        tenant_id: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<PromptRow>, DomainError>;
}
