//! Customer account session state.

use ember_north_core::{Email, SessionToken};

/// Whether a customer is signed in for this session.
///
/// Nothing is persisted: a restart starts signed out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AccountSession {
    /// Not signed in.
    #[default]
    SignedOut,
    /// Signed in with a token issued by the auth collaborator.
    SignedIn {
        email: Email,
        token: SessionToken,
    },
}

impl AccountSession {
    /// Whether a customer is currently signed in.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }

    /// Email of the signed-in customer, if any.
    #[must_use]
    pub const fn email(&self) -> Option<&Email> {
        match self {
            Self::SignedIn { email, .. } => Some(email),
            Self::SignedOut => None,
        }
    }
}
