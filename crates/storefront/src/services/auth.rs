//! Local authentication stub.

use secrecy::{ExposeSecret, SecretString};

use ember_north_core::{AuthError, AuthService, Email, SessionToken};

/// Auth service used until a real identity provider is connected.
///
/// Validates the email shape and requires a non-empty password, then
/// issues a throwaway session token. No credentials are verified.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAuthService;

impl AuthService for LocalAuthService {
    fn sign_in(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<(Email, SessionToken), AuthError> {
        let email = Email::parse(email)?;
        if password.expose_secret().is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        Ok((email, SessionToken::new()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_issues_token() {
        let password = SecretString::from("hunter2".to_owned());
        let (email, _token) = LocalAuthService
            .sign_in("customer@example.com", &password)
            .unwrap();
        assert_eq!(email.as_str(), "customer@example.com");
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let password = SecretString::from("hunter2".to_owned());
        let err = LocalAuthService.sign_in("not-an-email", &password).unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmail(_)));
    }

    #[test]
    fn test_empty_password_is_rejected() {
        let password = SecretString::from(String::new());
        let err = LocalAuthService
            .sign_in("customer@example.com", &password)
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }
}
