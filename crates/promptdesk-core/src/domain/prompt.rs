//! Managed prompt entity and the paginated read model built from it

use chrono::{DateTime, Utc};
use promptdesk_shared::TenantId;
use serde::{Deserialize, Serialize};

/// A prompt owned by exactly one tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: i32,
    pub tenant_id: TenantId,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One row of a tenant page, joined to the owning tenant's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRow {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub tenant_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptSummary {
    pub id: i32,
    pub title: String,
    pub body: String,
}

impl From<PromptRow> for PromptSummary {
    fn from(row: PromptRow) -> Self {
        Self { id: row.id, title: row.title, body: row.body }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptPage {
    pub tenant_id: TenantId,
    pub tenant_name: String,
    pub prompts: Vec<PromptSummary>,
    pub pagination: PageMeta,
}
