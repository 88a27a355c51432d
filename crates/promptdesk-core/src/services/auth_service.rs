// ============================================================================
// PromptDesk Core - Authentication Service
// File: crates/promptdesk-core/src/services/auth_service.rs
// ============================================================================
//! Username/password authentication against the credential store

use std::sync::{Arc, OnceLock};

use chrono::Utc;
use promptdesk_security::PasswordService;
use tracing::{error, info, warn};

use crate::domain::Identity;
use crate::error::AuthError;
use crate::repositories::IdentityRepository;

const PLACEHOLDER_PASSWORD: &str = "placeholder-password-never-issued";

/// Argon2 digest verified when the username is unknown. Hashed once per process.
fn placeholder_digest() -> &'static str {
    static DIGEST: OnceLock<String> = OnceLock::new();
    DIGEST.get_or_init(|| {
        PasswordService::hash(PLACEHOLDER_PASSWORD).unwrap_or_else(|e| {
            error!("Failed to hash placeholder digest: {}", e);
            String::new()
        })
    })
}

/// Verifies credentials. Minting the bearer token is left to the caller.
pub struct AuthService<R: IdentityRepository + ?Sized> {
    identity_repo: Arc<R>,
}

impl<R: IdentityRepository + ?Sized> AuthService<R> {
    pub fn new(identity_repo: Arc<R>) -> Self {
        Self { identity_repo }
    }

    /// Login with username and password
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        info!("Login attempt for username: {}", username);

        // 1. Find identity by exact username
        let found = self
            .identity_repo
            .find_by_username(username)
            .await
            .map_err(|e| {
                error!("Credential lookup failed: {}", e);
                AuthError::Internal(e.to_string())
            })?;

        // 2. Verify password off the async workers; unknown users are checked
        //    against a placeholder digest so both paths cost one Argon2 verify
        let candidate = password.to_string();
        let stored = found.as_ref().map(|identity| identity.password_hash.clone());
        let password_valid = tokio::task::spawn_blocking(move || {
            let digest = stored.as_deref().unwrap_or_else(|| placeholder_digest());
            PasswordService::verify(&candidate, digest)
        })
        .await
        .map_err(|e| AuthError::Internal(e.to_string()))?;

        let identity = match found {
            Some(identity) if password_valid => identity,
            Some(_) => {
                warn!("Login failed: invalid password for: {}", username);
                return Err(AuthError::InvalidCredentials);
            }
            None => {
                warn!("Login failed: unknown username: {}", username);
                return Err(AuthError::InvalidCredentials);
            }
        };

        // 3. Update last login
        let now = Utc::now();
        if let Err(e) = self.identity_repo.record_login(&identity.username, now).await {
            error!("Failed to update last login: {}", e);
            // Don't fail login for this
        }

        let mut identity = identity;
        identity.record_login(now);

        info!("Login successful for: {}", username);
        Ok(identity)
    }
}
