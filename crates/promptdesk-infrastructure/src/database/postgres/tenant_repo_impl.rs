// ============================================================================
// PromptDesk Infrastructure - PostgreSQL Tenant Repository
// File: crates/promptdesk-infrastructure/src/database/postgres/tenant_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use promptdesk_core::domain::Tenant;
use promptdesk_core::error::DomainError;
use promptdesk_core::repositories::TenantRepository;

use super::db_error;

pub struct PgTenantRepository {
    pool: PgPool,
}

impl PgTenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CompanyRow {
    pub id: String,
    pub name: String,
}

impl From<CompanyRow> for Tenant {
    fn from(row: CompanyRow) -> Self {
        Tenant { id: row.id, name: row.name }
    }
}

#[async_trait]
impl TenantRepository for PgTenantRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Tenant>, DomainError> {
        let row: Option<CompanyRow> = sqlx::query_as("SELECT id, name FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("finding company by id"))?;

        Ok(row.map(Tenant::from))
    }

    async fn create(&self, tenant: &Tenant) -> Result<Tenant, DomainError> {
        let row: CompanyRow = sqlx::query_as(
            "INSERT INTO companies (id, name) VALUES ($1, $2) RETURNING id, name",
        )
        .bind(&tenant.id)
        .bind(&tenant.name)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("creating company"))?;

        Ok(row.into())
    }
}
