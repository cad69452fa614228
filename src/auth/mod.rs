//! Authentication seam.
//!
//! A [`BearerTokenProvider`] derives the bearer token used on every request.
//! It is queried exactly once, at client construction; there is no refresh
//! logic. A long-lived token is assumed, and a stale token shows up as an
//! upstream 401 rather than a local error.

use std::fmt;

use secrecy::SecretString;

use crate::error::HubError;

/// Derives a bearer token from some credential material.
pub trait BearerTokenProvider: fmt::Debug + Send + Sync {
    /// Produce the bearer token sent in the `Authorization` header.
    fn generate_bearer_token(&self) -> Result<SecretString, HubError>;
}

/// Provider backed by a pre-issued token.
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: SecretString,
}

impl StaticTokenProvider {
    /// Wrap an already-issued token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
        }
    }
}

impl fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticTokenProvider")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl BearerTokenProvider for StaticTokenProvider {
    fn generate_bearer_token(&self) -> Result<SecretString, HubError> {
        Ok(self.token.clone())
    }
}
