//! Bearer token verification and role policy for protected operations

use std::sync::Arc;

use promptdesk_security::TokenCodec;
use tracing::{debug, error, warn};

use crate::domain::{Identity, Role};
use crate::error::AccessError;
use crate::repositories::IdentityRepository;

/// Reusable gate in front of every protected operation.
///
/// The credential store is authoritative: a token whose subject no longer
/// exists is rejected even if its signature and expiry are fine.
pub struct AccessGuard<R: IdentityRepository + ?Sized> {
    codec: Arc<TokenCodec>,
    identity_repo: Arc<R>,
}

impl<R: IdentityRepository + ?Sized> AccessGuard<R> {
    pub fn new(codec: Arc<TokenCodec>, identity_repo: Arc<R>) -> Self {
        Self { codec, identity_repo }
    }

    /// `required_role: None` admits any authenticated identity.
    pub async fn authorize(
        &self,
        raw_token: Option<&str>,
        required_role: Option<Role>,
    ) -> Result<Identity, AccessError> {
        let token = raw_token.ok_or_else(|| {
            debug!("Request carried no bearer token");
            AccessError::Unauthenticated
        })?;

        let subject = self
            .codec
            .verify(token)
            .map_err(|_| AccessError::Unauthenticated)?;

        let identity = self
            .identity_repo
            .find_by_username(&subject)
            .await
            .map_err(|e| {
                error!("Failed to resolve token subject: {}", e);
                AccessError::Internal(e.to_string())
            })?
            .ok_or_else(|| {
                warn!("Token subject no longer exists: {}", subject);
                AccessError::Unauthenticated
            })?;

        if let Some(required) = required_role {
            if !identity.has_role(required) {
                warn!(
                    "Access denied for {}: role {} but {} required",
                    identity.username, identity.role, required
                );
                return Err(AccessError::Forbidden { required });
            }
        }

        Ok(identity)
    }
}
