//! JWT token handling

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Lifetime of an access token unless configured otherwise.
pub const ACCESS_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

const TOKEN_TYPE_ACCESS: &str = "access";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token creation failed: {0}")]
    CreationError(String),
    /// Malformed, badly signed and expired tokens are deliberately indistinguishable.
    #[error("Invalid token")]
    Invalid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub token_type: String,
}

/// Issues and verifies HS256 access tokens with one process-wide key.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked in `verify_at` with an exclusive bound and no leeway.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let iat = now.timestamp();
        let ttl = i64::try_from(self.ttl.as_secs())
            .map_err(|_| TokenError::CreationError("ttl out of range".into()))?;
        let claims = Claims {
            sub: subject.to_string(),
            iat,
            exp: iat.saturating_add(ttl),
            token_type: TOKEN_TYPE_ACCESS.to_string(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::CreationError(e.to_string()))
    }

    /// Returns the subject of a valid token.
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Valid on `[iat, exp)` at one-second resolution.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Token rejected: {}", e);
                TokenError::Invalid
            })?;

        if now.timestamp() >= claims.exp {
            debug!("Token rejected: expired at {}", claims.exp);
            return Err(TokenError::Invalid);
        }
        if claims.token_type != TOKEN_TYPE_ACCESS {
            debug!("Token rejected: unexpected token type {}", claims.token_type);
            return Err(TokenError::Invalid);
        }

        Ok(claims.sub)
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}
