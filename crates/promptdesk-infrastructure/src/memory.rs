//! In-memory implementation of every storage port.
//!
//! Used by the router tests and for running the server without PostgreSQL.
//! An optional per-call latency makes deadline behaviour observable.

use std::sync::atomic::{AtomicI32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use promptdesk_core::domain::{Identity, NewIdentity, Prompt, PromptRow, Tenant};
use promptdesk_core::error::DomainError;
use promptdesk_core::repositories::{
    HealthRepository, IdentityRepository, PromptRepository, TenantRepository,
};

#[derive(Default)]
pub struct InMemoryStore {
    tenants: RwLock<Vec<Tenant>>,
    identities: RwLock<Vec<Identity>>,
    prompts: RwLock<Vec<Prompt>>,
    next_identity_id: AtomicI32,
    next_prompt_id: AtomicI32,
    latency: Option<Duration>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every storage call sleeps this long before touching any data.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub async fn insert_prompt(
        &self,
        tenant_id: &str,
        title: &str,
        body: &str,
    ) -> Result<Prompt, DomainError> {
        if !self.tenants.read().await.iter().any(|t| t.id == tenant_id) {
            return Err(DomainError::TenantNotFound(tenant_id.to_string()));
        }

        let now = Utc::now();
        let prompt = Prompt {
            id: self.next_prompt_id.fetch_add(1, Ordering::SeqCst) + 1,
            tenant_id: tenant_id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.prompts.write().await.push(prompt.clone());
        Ok(prompt)
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl IdentityRepository for InMemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>, DomainError> {
        self.simulate_latency().await;
        let identities = self.identities.read().await;
        Ok(identities.iter().find(|i| i.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, DomainError> {
        self.simulate_latency().await;
        let identities = self.identities.read().await;
        Ok(identities.iter().find(|i| i.email == email).cloned())
    }

    async fn create(&self, identity: &NewIdentity) -> Result<Identity, DomainError> {
        self.simulate_latency().await;
        let mut identities = self.identities.write().await;
        if identities.iter().any(|i| i.username == identity.username) {
            return Err(DomainError::UsernameAlreadyExists(identity.username.clone()));
        }
        if identities.iter().any(|i| i.email == identity.email) {
            return Err(DomainError::EmailAlreadyExists(identity.email.clone()));
        }

        let created = Identity {
            id: self.next_identity_id.fetch_add(1, Ordering::SeqCst) + 1,
            username: identity.username.clone(),
            email: identity.email.clone(),
            password_hash: identity.password_hash.clone(),
            role: identity.role,
            tenant_id: identity.tenant_id.clone(),
            created_at: Utc::now(),
            last_login: None,
        };
        identities.push(created.clone());
        Ok(created)
    }

    async fn record_login(&self, username: &str, at: DateTime<Utc>) -> Result<(), DomainError> {
        self.simulate_latency().await;
        let mut identities = self.identities.write().await;
        if let Some(identity) = identities.iter_mut().find(|i| i.username == username) {
            identity.record_login(at);
        }
        Ok(())
    }
}

#[async_trait]
impl TenantRepository for InMemoryStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Tenant>, DomainError> {
        self.simulate_latency().await;
        let tenants = self.tenants.read().await;
        Ok(tenants.iter().find(|t| t.id == id).cloned())
    }

    async fn create(&self, tenant: &Tenant) -> Result<Tenant, DomainError> {
        self.simulate_latency().await;
        let mut tenants = self.tenants.write().await;
        if tenants.iter().any(|t| t.id == tenant.id) {
            return Err(DomainError::ValidationError(format!(
                "tenant {} already exists",
                tenant.id
            )));
        }
        tenants.push(tenant.clone());
        Ok(tenant.clone())
    }
}

#[async_trait]
impl PromptRepository for InMemoryStore {
    async fn count_by_tenant(&self, tenant_id: &str) -> Result<i64, DomainError> {
        self.simulate_latency().await;
        let prompts = self.prompts.read().await;
        let count = prompts.iter().filter(|p| p.tenant_id == tenant_id).count();
        i64::try_from(count).map_err(|e| DomainError::InternalError(e.to_string()))
    }

    async fn find_page_by_tenant(
        &self,
        tenant_id: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<PromptRow>, DomainError> {
        self.simulate_latency().await;
        let tenant_name = match self.tenants.read().await.iter().find(|t| t.id == tenant_id) {
            Some(tenant) => tenant.name.clone(),
            None => return Ok(Vec::new()),
        };

        let mut owned: Vec<Prompt> = self
            .prompts
            .read()
            .await
            .iter()
            .filter(|p| p.tenant_id == tenant_id)
            .cloned()
            .collect();
        owned.sort_by_key(|p| p.id);

        let skip = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
        let take = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);

        Ok(owned
            .into_iter()
            .skip(skip)
            .take(take)
            .map(|p| PromptRow {
                id: p.id,
                title: p.title,
                body: p.body,
                tenant_name: tenant_name.clone(),
            })
            .collect())
    }
}

#[async_trait]
impl HealthRepository for InMemoryStore {
    async fn ping(&self) -> Result<(), DomainError> {
        self.simulate_latency().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptdesk_core::domain::Role;

    async fn store_with_prompts(tenant: &str, count: usize) -> InMemoryStore {
        let store = InMemoryStore::new();
        TenantRepository::create(&store, &Tenant::new(tenant, "Acme Corp"))
            .await
            .unwrap();
        for n in 1..=count {
            store
                .insert_prompt(tenant, &format!("Title {}", n), &format!("Body {}", n))
                .await
                .unwrap();
        }
        store
    }

    fn new_identity(username: &str, email: &str) -> NewIdentity {
        NewIdentity {
            username: username.into(),
            email: email.into(),
            password_hash: "hash".into(),
            role: Role::User,
            tenant_id: None,
        }
    }

    #[tokio::test]
    async fn test_pages_are_tenant_scoped_and_ordered() {
        let store = store_with_prompts("acme", 3).await;
        TenantRepository::create(&store, &Tenant::new("globex", "Globex"))
            .await
            .unwrap();
        store.insert_prompt("globex", "Other", "Not yours").await.unwrap();

        assert_eq!(store.count_by_tenant("acme").await.unwrap(), 3);
        assert_eq!(store.count_by_tenant("globex").await.unwrap(), 1);
        assert_eq!(store.count_by_tenant("nobody").await.unwrap(), 0);

        let rows = store.find_page_by_tenant("acme", 1, 5).await.unwrap();
        let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(rows.iter().all(|r| r.tenant_name == "Acme Corp"));
    }

    #[tokio::test]
    async fn test_offset_past_end_is_empty() {
        let store = store_with_prompts("acme", 2).await;
        assert!(store.find_page_by_tenant("acme", 10, 5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_prompt_requires_existing_tenant() {
        let store = InMemoryStore::new();
        let err = store.insert_prompt("ghost", "t", "b").await.unwrap_err();
        assert!(matches!(err, DomainError::TenantNotFound(_)));
    }

    #[tokio::test]
    async fn test_identity_uniqueness() {
        let store = InMemoryStore::new();
        IdentityRepository::create(&store, &new_identity("alice", "alice@example.com"))
            .await
            .unwrap();

        let err = IdentityRepository::create(&store, &new_identity("alice", "other@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::UsernameAlreadyExists(_)));

        let err = IdentityRepository::create(&store, &new_identity("bob", "alice@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::EmailAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_username_lookup_is_case_sensitive() {
        let store = InMemoryStore::new();
        IdentityRepository::create(&store, &new_identity("alice", "alice@example.com"))
            .await
            .unwrap();
        assert!(store.find_by_username("alice").await.unwrap().is_some());
        assert!(store.find_by_username("Alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_record_login() {
        let store = InMemoryStore::new();
        IdentityRepository::create(&store, &new_identity("alice", "alice@example.com"))
            .await
            .unwrap();
        let at = Utc::now();
        store.record_login("alice", at).await.unwrap();
        let alice = store.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(alice.last_login, Some(at));
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_applies_to_every_call() {
        let store = InMemoryStore::new().with_latency(Duration::from_secs(2));
        let started = tokio::time::Instant::now();
        store.ping().await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(2));
    }
}
