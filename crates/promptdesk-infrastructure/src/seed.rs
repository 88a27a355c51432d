//! Default tenant and accounts for a fresh database

use std::sync::Arc;

use promptdesk_core::domain::{Role, Tenant};
use promptdesk_core::error::DomainError;
use promptdesk_core::repositories::{IdentityRepository, TenantRepository};
use promptdesk_core::services::{ProvisionRequest, ProvisioningService};
use promptdesk_shared::config::SeedSettings;
use promptdesk_shared::constants::{DEFAULT_TENANT_ID, DEFAULT_TENANT_NAME};
use tracing::info;

pub const SEED_ADMIN_USERNAME: &str = "admin";
pub const SEED_USER_USERNAME: &str = "testuser";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub tenant_created: bool,
    pub identities_created: usize,
}

/// Seed `default_company` with one admin and one user account.
///
/// Every account is validated before anything is written. Re-running creates
/// whatever is still missing, so an interrupted seed is completed next time.
pub async fn seed_defaults<I, T>(
    identity_repo: Arc<I>,
    tenant_repo: Arc<T>,
    settings: &SeedSettings,
) -> Result<SeedReport, DomainError>
where
    I: IdentityRepository + ?Sized,
    T: TenantRepository + ?Sized,
{
    let requests: Vec<ProvisionRequest> = [
        (SEED_ADMIN_USERNAME, settings.admin_password.as_str(), Role::Admin),
        (SEED_USER_USERNAME, settings.user_password.as_str(), Role::User),
    ]
    .into_iter()
    .map(|(username, password, role)| ProvisionRequest {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password: password.to_string(),
        role,
        tenant_id: Some(DEFAULT_TENANT_ID.to_string()),
    })
    .collect();

    for request in &requests {
        request.check()?;
    }

    let provisioning = ProvisioningService::new(identity_repo.clone(), tenant_repo);
    let tenant_created = provisioning
        .ensure_tenant(&Tenant::new(DEFAULT_TENANT_ID, DEFAULT_TENANT_NAME))
        .await?;

    let mut report = SeedReport { tenant_created, identities_created: 0 };
    for request in requests {
        if identity_repo.find_by_username(&request.username).await?.is_some() {
            continue;
        }
        provisioning.provision(request).await?;
        report.identities_created += 1;
    }

    if report == SeedReport::default() {
        info!("Seed skipped: {} already complete", DEFAULT_TENANT_ID);
    } else {
        info!(
            "Seeded {} (tenant_created={}, accounts={})",
            DEFAULT_TENANT_ID, report.tenant_created, report.identities_created
        );
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryStore;
    use promptdesk_security::PasswordService;

    fn settings() -> SeedSettings {
        SeedSettings {
            enabled: true,
            admin_password: "adminpassword".into(),
            user_password: "userpassword".into(),
        }
    }

    #[tokio::test]
    async fn test_seed_creates_tenant_and_accounts() {
        let store = Arc::new(InMemoryStore::new());
        let report = seed_defaults(store.clone(), store.clone(), &settings()).await.unwrap();
        assert_eq!(report, SeedReport { tenant_created: true, identities_created: 2 });

        let tenant = store.find_by_id(DEFAULT_TENANT_ID).await.unwrap().unwrap();
        assert_eq!(tenant.name, "Default Company");

        let admin = store.find_by_username("admin").await.unwrap().unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert!(PasswordService::verify("adminpassword", &admin.password_hash));

        let user = store.find_by_username("testuser").await.unwrap().unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.tenant_id.as_deref(), Some(DEFAULT_TENANT_ID));
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = Arc::new(InMemoryStore::new());
        seed_defaults(store.clone(), store.clone(), &settings()).await.unwrap();
        let second = seed_defaults(store.clone(), store.clone(), &settings()).await.unwrap();
        assert_eq!(second, SeedReport::default());
    }

    #[tokio::test]
    async fn test_short_seed_password_is_rejected_and_reseed_completes() {
        let store = Arc::new(InMemoryStore::new());
        let mut weak = settings();
        weak.user_password = "short".into();
        let err = seed_defaults(store.clone(), store.clone(), &weak).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
        assert!(store.find_by_id(DEFAULT_TENANT_ID).await.unwrap().is_none());
        assert!(store.find_by_username("admin").await.unwrap().is_none());

        let report = seed_defaults(store.clone(), store.clone(), &settings()).await.unwrap();
        assert_eq!(report, SeedReport { tenant_created: true, identities_created: 2 });
        assert!(store.find_by_username("testuser").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_missing_account_is_added_when_tenant_exists() {
        let store = Arc::new(InMemoryStore::new());
        TenantRepository::create(&*store, &Tenant::new(DEFAULT_TENANT_ID, DEFAULT_TENANT_NAME))
            .await
            .unwrap();

        let report = seed_defaults(store.clone(), store.clone(), &settings()).await.unwrap();
        assert_eq!(report, SeedReport { tenant_created: false, identities_created: 2 });

        let user = store.find_by_username("testuser").await.unwrap().unwrap();
        assert!(PasswordService::verify("userpassword", &user.password_hash));
    }
}
