//! Session tokens and the authentication collaborator interface.

use core::fmt;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::types::{Email, EmailError};

/// Opaque session token issued on sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(Uuid);

impl SessionToken {
    /// Issue a fresh token.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors surfaced by an authentication service.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Email failed structural validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Wrong password or unknown account.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The backing identity provider is unreachable.
    #[error("authentication service unavailable: {0}")]
    Unavailable(String),
}

/// Identity provider integration.
///
/// Accepts an email/password pair and returns the parsed email together
/// with a session token. The shipped implementation is a local stub; a
/// real backend can replace it without touching the cart or routing
/// contracts.
pub trait AuthService {
    /// Sign a customer in.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the email is malformed or the
    /// credentials are rejected.
    fn sign_in(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<(Email, SessionToken), AuthError>;
}
