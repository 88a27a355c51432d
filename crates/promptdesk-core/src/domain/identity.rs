// ============================================================================
// PromptDesk Core - Identity Entity
// File: crates/promptdesk-core/src/domain/identity.rs
// ============================================================================

use std::fmt;

use chrono::{DateTime, Utc};
use promptdesk_shared::TenantId;
use serde::{Deserialize, Serialize};

/// Role enumeration. Authorization compares roles by exact equality only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    User,
    CompanyAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::CompanyAdmin => "company_admin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "user" => Some(Role::User),
            "company_admin" => Some(Role::CompanyAdmin),
            _ => None,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated principal as held by the credential store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub tenant_id: Option<TenantId>,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl Identity {
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    pub fn record_login(&mut self, at: DateTime<Utc>) {
        self.last_login = Some(at);
    }
}

/// Identity about to be inserted. The password is already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIdentity {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub tenant_id: Option<TenantId>,
}
