// ============================================================================
// PromptDesk Infrastructure - PostgreSQL Prompt Repository
// File: crates/promptdesk-infrastructure/src/database/postgres/prompt_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::debug;

use promptdesk_core::domain::PromptRow;
use promptdesk_core::error::DomainError;
use promptdesk_core::repositories::PromptRepository;

use super::db_error;

pub struct PgPromptRepository {
    pool: PgPool,
}

impl PgPromptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PromptPageRow {
    pub id: i32,
    pub prompt_title: String,
    pub prompt: String,
    pub company_name: String,
}

impl From<PromptPageRow> for PromptRow {
    fn from(row: PromptPageRow) -> Self {
        PromptRow {
            id: row.id,
            title: row.prompt_title,
            body: row.prompt,
            tenant_name: row.company_name,
        }
    }
}

#[async_trait]
impl PromptRepository for PgPromptRepository {
    async fn count_by_tenant(&self, tenant_id: &str) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(id) FROM prompt_management WHERE company_id = $1",
        )
        .bind(tenant_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("counting prompts"))
    }

    async fn find_page_by_tenant(
        &self,
        tenant_id: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<PromptRow>, DomainError> {
        let rows: Vec<PromptPageRow> = sqlx::query_as(
            r#"
            SELECT
                p.id, p.prompt_title, p.prompt,
                c.name AS company_name
            FROM prompt_management p
            JOIN companies c ON c.id = p.company_id
            WHERE p.company_id = $1
            ORDER BY p.id ASC
            OFFSET $2
            LIMIT $3
            "#,
        )
        .bind(tenant_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("fetching prompt page"))?;

        debug!("Fetched {} prompt rows for company {}", rows.len(), tenant_id);
        Ok(rows.into_iter().map(PromptRow::from).collect())
    }
}
