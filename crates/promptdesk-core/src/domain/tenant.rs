//! Tenant domain entity

use promptdesk_shared::TenantId;
use serde::{Deserialize, Serialize};

/// Organizational boundary owning a set of prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    pub name: String,
}

impl Tenant {
    pub fn new(id: impl Into<TenantId>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}
