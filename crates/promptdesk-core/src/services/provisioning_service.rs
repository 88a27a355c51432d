//! Account provisioning: create tenants and identities with hashed passwords

use std::sync::Arc;

use promptdesk_security::PasswordService;
use promptdesk_shared::utils::mask_email;
use promptdesk_shared::TenantId;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::{Identity, NewIdentity, Role, Tenant};
use crate::error::DomainError;
use crate::repositories::{IdentityRepository, TenantRepository};

#[derive(Debug, Clone, Validate)]
pub struct ProvisionRequest {
    #[validate(length(min = 3, max = 64, message = "Username must be between 3 and 64 characters"))]
    pub username: String,

    #[validate(email(message = "Email is not valid"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be between 8 and 128 characters"))]
    pub password: String,

    pub role: Role,
    pub tenant_id: Option<TenantId>,
}

impl ProvisionRequest {
    /// Field rules only. Uniqueness and tenant existence are checked against storage in `provision`.
    pub fn check(&self) -> Result<(), DomainError> {
        self.validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))
    }
}

pub struct ProvisioningService<I, T>
where
    I: IdentityRepository + ?Sized,
    T: TenantRepository + ?Sized,
{
    identity_repo: Arc<I>,
    tenant_repo: Arc<T>,
}

impl<I, T> ProvisioningService<I, T>
where
    I: IdentityRepository + ?Sized,
    T: TenantRepository + ?Sized,
{
    pub fn new(identity_repo: Arc<I>, tenant_repo: Arc<T>) -> Self {
        Self { identity_repo, tenant_repo }
    }

    /// Create the tenant unless one with the same id exists. Returns whether it was created.
    pub async fn ensure_tenant(&self, tenant: &Tenant) -> Result<bool, DomainError> {
        if self.tenant_repo.find_by_id(&tenant.id).await?.is_some() {
            return Ok(false);
        }
        self.tenant_repo.create(tenant).await?;
        info!("Tenant created: {}", tenant.id);
        Ok(true)
    }

    /// Register a new identity
    pub async fn provision(&self, request: ProvisionRequest) -> Result<Identity, DomainError> {
        request.check()?;

        // 1. Tenant must exist when given
        if let Some(tenant_id) = &request.tenant_id {
            if self.tenant_repo.find_by_id(tenant_id).await?.is_none() {
                return Err(DomainError::TenantNotFound(tenant_id.clone()));
            }
        }

        // 2. Username and email are globally unique
        if self.identity_repo.find_by_username(&request.username).await?.is_some() {
            warn!("Provisioning failed: username already exists: {}", request.username);
            return Err(DomainError::UsernameAlreadyExists(request.username));
        }
        if self.identity_repo.find_by_email(&request.email).await?.is_some() {
            warn!("Provisioning failed: email already exists: {}", mask_email(&request.email));
            return Err(DomainError::EmailAlreadyExists(request.email));
        }

        // 3. Hash password
        let password = request.password;
        let password_hash = tokio::task::spawn_blocking(move || PasswordService::hash(&password))
            .await
            .map_err(|e| DomainError::InternalError(e.to_string()))?
            .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;

        // 4. Save
        let identity = self
            .identity_repo
            .create(&NewIdentity {
                username: request.username,
                email: request.email,
                password_hash,
                role: request.role,
                tenant_id: request.tenant_id,
            })
            .await?;

        info!("Identity provisioned: {} ({})", identity.username, identity.role);
        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{MockIdentityRepository, MockTenantRepository};
    use chrono::Utc;

    fn request(username: &str, email: &str) -> ProvisionRequest {
        ProvisionRequest {
            username: username.into(),
            email: email.into(),
            password: "userpassword".into(),
            role: Role::User,
            tenant_id: Some("default_company".into()),
        }
    }

    fn tenants_with_default() -> MockTenantRepository {
        let mut tenants = MockTenantRepository::new();
        tenants.expect_find_by_id().returning(|id| {
            Ok((id == "default_company").then(|| Tenant::new("default_company", "Default Company")))
        });
        tenants
    }

    #[tokio::test]
    async fn test_provision_hashes_password() {
        let mut identities = MockIdentityRepository::new();
        identities.expect_find_by_username().returning(|_| Ok(None));
        identities.expect_find_by_email().returning(|_| Ok(None));
        identities.expect_create().times(1).returning(|new| {
            assert_ne!(new.password_hash, "userpassword");
            assert!(PasswordService::verify("userpassword", &new.password_hash));
            Ok(Identity {
                id: 1,
                username: new.username.clone(),
                email: new.email.clone(),
                password_hash: new.password_hash.clone(),
                role: new.role,
                tenant_id: new.tenant_id.clone(),
                created_at: Utc::now(),
                last_login: None,
            })
        });

        let service = ProvisioningService::new(Arc::new(identities), Arc::new(tenants_with_default()));
        let identity = service.provision(request("testuser", "testuser@example.com")).await.unwrap();
        assert_eq!(identity.username, "testuser");
        assert_eq!(identity.tenant_id.as_deref(), Some("default_company"));
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let mut identities = MockIdentityRepository::new();
        identities.expect_find_by_username().returning(|name| {
            Ok(Some(Identity {
                id: 1,
                username: name.to_string(),
                email: "taken@example.com".into(),
                password_hash: String::new(),
                role: Role::User,
                tenant_id: None,
                created_at: Utc::now(),
                last_login: None,
            }))
        });
        identities.expect_create().never();

        let service = ProvisioningService::new(Arc::new(identities), Arc::new(tenants_with_default()));
        let err = service.provision(request("testuser", "new@example.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::UsernameAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let mut identities = MockIdentityRepository::new();
        identities.expect_find_by_username().returning(|_| Ok(None));
        identities.expect_find_by_email().returning(|email| {
            Ok(Some(Identity {
                id: 1,
                username: "someone".into(),
                email: email.to_string(),
                password_hash: String::new(),
                role: Role::User,
                tenant_id: None,
                created_at: Utc::now(),
                last_login: None,
            }))
        });
        identities.expect_create().never();

        let service = ProvisioningService::new(Arc::new(identities), Arc::new(tenants_with_default()));
        let err = service.provision(request("fresh", "taken@example.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::EmailAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_unknown_tenant_rejected() {
        let identities = MockIdentityRepository::new();
        let service = ProvisioningService::new(Arc::new(identities), Arc::new(tenants_with_default()));

        let mut req = request("fresh", "fresh@example.com");
        req.tenant_id = Some("nope".into());
        let err = service.provision(req).await.unwrap_err();
        assert!(matches!(err, DomainError::TenantNotFound(_)));
    }

    #[tokio::test]
    async fn test_invalid_input_rejected() {
        let service = ProvisioningService::new(
            Arc::new(MockIdentityRepository::new()),
            Arc::new(MockTenantRepository::new()),
        );
        let mut req = request("ab", "not-an-email");
        req.password = "short".into();
        let err = service.provision(req).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_ensure_tenant_is_idempotent() {
        let mut tenants = tenants_with_default();
        tenants.expect_create().never();
        let service = ProvisioningService::new(Arc::new(MockIdentityRepository::new()), Arc::new(tenants));

        let created = service
            .ensure_tenant(&Tenant::new("default_company", "Default Company"))
            .await
            .unwrap();
        assert!(!created);
    }
}
