// ============================================================================
// PromptDesk Core - Prompt Retrieval Service
// File: crates/promptdesk-core/src/services/prompt_service.rs
// ============================================================================
//! Tenant-scoped, paginated prompt reads under a hard deadline.
//!
//! The whole read (count, page, name lookup) runs inside one
//! `tokio::time::timeout`. When it elapses the storage future is dropped, so
//! no partial page can be produced after the caller has been answered.

use std::sync::Arc;
use std::time::Duration;

use promptdesk_shared::PageRequest;
use tracing::{debug, error, warn};

use crate::domain::{PageMeta, PromptPage, PromptSummary};
use crate::error::{DomainError, RetrievalError};
use crate::repositories::{PromptRepository, TenantRepository};

/// Shown when a page past the end is requested and the tenant row is gone.
const UNKNOWN_TENANT_NAME: &str = "Unknown";

pub struct PromptService<P, T>
where
    P: PromptRepository + ?Sized,
    T: TenantRepository + ?Sized,
{
    prompt_repo: Arc<P>,
    tenant_repo: Arc<T>,
    deadline: Duration,
}

impl<P, T> PromptService<P, T>
where
    P: PromptRepository + ?Sized,
    T: TenantRepository + ?Sized,
{
    pub fn new(prompt_repo: Arc<P>, tenant_repo: Arc<T>, deadline: Duration) -> Self {
        Self { prompt_repo, tenant_repo, deadline }
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Fetch a page using the configured deadline.
    pub async fn fetch_page(
        &self,
        tenant_id: &str,
        request: PageRequest,
    ) -> Result<PromptPage, RetrievalError> {
        self.fetch_page_within(tenant_id, request, self.deadline).await
    }

    pub async fn fetch_page_within(
        &self,
        tenant_id: &str,
        request: PageRequest,
        deadline: Duration,
    ) -> Result<PromptPage, RetrievalError> {
        if tenant_id.trim().is_empty() {
            return Err(RetrievalError::InvalidTenant);
        }

        match tokio::time::timeout(deadline, self.load_page(tenant_id, request)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(
                    "Prompt read for tenant {} exceeded {:?} (page={}, limit={})",
                    tenant_id, deadline, request.page, request.limit
                );
                Err(RetrievalError::DeadlineExceeded)
            }
        }
    }

    async fn load_page(
        &self,
        tenant_id: &str,
        request: PageRequest,
    ) -> Result<PromptPage, RetrievalError> {
        let total = self
            .prompt_repo
            .count_by_tenant(tenant_id)
            .await
            .map_err(internal)?;

        if total == 0 {
            debug!("No prompts for tenant {}", tenant_id);
            return Err(RetrievalError::NotFound);
        }

        let rows = self
            .prompt_repo
            .find_page_by_tenant(tenant_id, request.offset(), i64::from(request.limit))
            .await
            .map_err(internal)?;

        let tenant_name = match rows.first() {
            Some(row) => row.tenant_name.clone(),
            // Page past the end: nothing to join against.
            None => self
                .tenant_repo
                .find_by_id(tenant_id)
                .await
                .map_err(internal)?
                .map(|tenant| tenant.name)
                .unwrap_or_else(|| UNKNOWN_TENANT_NAME.to_string()),
        };

        debug!(
            "Loaded {} of {} prompts for tenant {} (page={})",
            rows.len(),
            total,
            tenant_id,
            request.page
        );

        Ok(PromptPage {
            tenant_id: tenant_id.to_string(),
            tenant_name,
            prompts: rows.into_iter().map(PromptSummary::from).collect(),
            pagination: PageMeta { page: request.page, limit: request.limit, total },
        })
    }
}

fn internal(e: DomainError) -> RetrievalError {
    error!("Prompt retrieval failed: {}", e);
    RetrievalError::Internal(e.to_string())
}
