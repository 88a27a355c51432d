// ============================================================================
// PromptDesk Infrastructure - PostgreSQL Identity Repository
// File: crates/promptdesk-infrastructure/src/database/postgres/identity_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;

use promptdesk_core::domain::{Identity, NewIdentity, Role};
use promptdesk_core::error::DomainError;
use promptdesk_core::repositories::IdentityRepository;

use super::db_error;

const USERNAME_CONSTRAINT: &str = "users_username_key";
const EMAIL_CONSTRAINT: &str = "users_email_key";

pub struct PgIdentityRepository {
    pool: PgPool,
}

impl PgIdentityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct IdentityRow {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub role: String,
    pub company_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl TryFrom<IdentityRow> for Identity {
    type Error = DomainError;

    fn try_from(row: IdentityRow) -> Result<Self, Self::Error> {
        let role = Role::from_str(&row.role).ok_or_else(|| {
            DomainError::DatabaseError(format!("unknown role '{}' for user {}", row.role, row.id))
        })?;
        Ok(Identity {
            id: row.id,
            username: row.username,
            email: row.email,
            password_hash: row.hashed_password,
            role,
            tenant_id: row.company_id,
            created_at: row.created_at,
            last_login: row.last_login,
        })
    }
}

fn map_insert_error(identity: &NewIdentity, e: sqlx::Error) -> DomainError {
    let constraint = e
        .as_database_error()
        .and_then(|db| db.constraint())
        .map(str::to_owned);
    match constraint.as_deref() {
        Some(USERNAME_CONSTRAINT) => DomainError::UsernameAlreadyExists(identity.username.clone()),
        Some(EMAIL_CONSTRAINT) => DomainError::EmailAlreadyExists(identity.email.clone()),
        _ => db_error("creating user")(e),
    }
}

#[async_trait]
impl IdentityRepository for PgIdentityRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>, DomainError> {
        let row: Option<IdentityRow> = sqlx::query_as(
            r#"
            SELECT
                id, username, email, hashed_password,
                role, company_id, created_at, last_login
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding user by username"))?;

        row.map(Identity::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, DomainError> {
        let row: Option<IdentityRow> = sqlx::query_as(
            r#"
            SELECT
                id, username, email, hashed_password,
                role, company_id, created_at, last_login
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding user by email"))?;

        row.map(Identity::try_from).transpose()
    }

    async fn create(&self, identity: &NewIdentity) -> Result<Identity, DomainError> {
        let row: IdentityRow = sqlx::query_as(
            r#"
            INSERT INTO users (username, email, hashed_password, role, company_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING
                id, username, email, hashed_password,
                role, company_id, created_at, last_login
            "#,
        )
        .bind(&identity.username)
        .bind(&identity.email)
        .bind(&identity.password_hash)
        .bind(identity.role.as_str())
        .bind(&identity.tenant_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(identity, e))?;

        info!("User created: {}", row.username);
        Identity::try_from(row)
    }

    async fn record_login(&self, username: &str, at: DateTime<Utc>) -> Result<(), DomainError> {
        sqlx::query("UPDATE users SET last_login = $2 WHERE username = $1")
            .bind(username)
            .bind(at)
            .execute(&self.pool)
            .await
            .map_err(db_error("recording last login"))?;
        Ok(())
    }
}
