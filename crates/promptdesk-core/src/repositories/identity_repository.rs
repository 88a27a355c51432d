//! Identity repository trait (port)

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Identity, NewIdentity};
use crate::error::DomainError;

/// Credential store. Usernames are matched exactly and case-sensitively.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, DomainError>;
    async fn create(&self, identity: &NewIdentity) -> Result<Identity, DomainError>;
    async fn record_login(&self, username: &str, at: DateTime<Utc>) -> Result<(), DomainError>;
}
