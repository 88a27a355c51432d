use async_trait::async_trait;
use sqlx::PgPool;

use promptdesk_core::error::DomainError;
use promptdesk_core::repositories::HealthRepository;

use super::db_error;

pub struct PgHealthRepository {
    pool: PgPool,
}

impl PgHealthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthRepository for PgHealthRepository {
    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(db_error("pinging database"))?;
        Ok(())
    }
}
