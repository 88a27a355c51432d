//! Application-wide constants

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_LIMIT: u32 = 100;
pub const MAX_PAGE_LIMIT: u32 = 100;
pub const TOKEN_TYPE_BEARER: &str = "bearer";
pub const DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES: u64 = 30;
pub const DEFAULT_RETRIEVAL_DEADLINE_MS: u64 = 3_000;

// Seed data
pub const DEFAULT_TENANT_ID: &str = "default_company";
pub const DEFAULT_TENANT_NAME: &str = "Default Company";
