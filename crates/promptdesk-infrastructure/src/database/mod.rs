//! Database module (PostgreSQL adapters)

pub mod connection;
pub mod postgres;

pub use connection::{create_bootstrap_pool, create_pool, run_migrations};
pub use postgres::{PgHealthRepository, PgIdentityRepository, PgPromptRepository, PgTenantRepository};
