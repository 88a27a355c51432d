//! # PromptDesk Infrastructure
//!
//! Storage adapters for the core ports: PostgreSQL via sqlx and an in-memory
//! store for tests and local runs, plus migrations and default seed data.

pub mod database;
pub mod memory;
pub mod seed;

pub use database::{
    create_bootstrap_pool, create_pool, run_migrations, PgHealthRepository, PgIdentityRepository,
    PgPromptRepository, PgTenantRepository,
};
pub use memory::InMemoryStore;
pub use seed::{seed_defaults, SeedReport};
