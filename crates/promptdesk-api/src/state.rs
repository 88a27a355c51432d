use std::sync::Arc;
use std::time::Duration;

use promptdesk_core::repositories::{
    HealthRepository, IdentityRepository, PromptRepository, TenantRepository,
};
use promptdesk_core::services::{AccessGuard, AuthService, PromptService};
use promptdesk_security::TokenCodec;

/// Shared by every request. Built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService<dyn IdentityRepository>>,
    pub guard: Arc<AccessGuard<dyn IdentityRepository>>,
    pub prompts: Arc<PromptService<dyn PromptRepository, dyn TenantRepository>>,
    pub codec: Arc<TokenCodec>,
    pub health: Arc<dyn HealthRepository>,
}

impl AppState {
    pub fn new(
        identities: Arc<dyn IdentityRepository>,
        tenants: Arc<dyn TenantRepository>,
        prompts: Arc<dyn PromptRepository>,
        health: Arc<dyn HealthRepository>,
        codec: Arc<TokenCodec>,
        retrieval_deadline: Duration,
    ) -> Self {
        Self {
            auth: Arc::new(AuthService::new(identities.clone())),
            guard: Arc::new(AccessGuard::new(codec.clone(), identities)),
            prompts: Arc::new(PromptService::new(prompts, tenants, retrieval_deadline)),
            codec,
            health,
        }
    }
}
