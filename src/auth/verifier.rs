//! Credential verification

use crate::auth::models::LoginRequest;
use crate::error::{Error, Result};

/// Decides whether a pair of credentials is accepted.
///
/// Credentials reaching a verifier have already passed the non-empty check.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, request: &LoginRequest) -> Result<()>;
}

/// Accepts every email and password that passed validation
#[derive(Debug, Clone, Copy, Default)]
pub struct MockVerifier;

impl CredentialVerifier for MockVerifier {
    fn verify(&self, _request: &LoginRequest) -> Result<()> {
        Ok(())
    }
}

/// Check that both fields were filled in
pub fn validate_credentials(request: &LoginRequest) -> Result<()> {
    match (request.email.is_empty(), request.password.is_empty()) {
        (false, false) => Ok(()),
        (true, true) => Err(Error::Validation(
            "email and password are empty".to_string(),
        )),
        (true, false) => Err(Error::Validation("email is empty".to_string())),
        (false, true) => Err(Error::Validation("password is empty".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_accepts_any_pair() {
        let verifier = MockVerifier;
        assert!(verifier.verify(&LoginRequest::new("a@b.com", "x")).is_ok());
        assert!(verifier.verify(&LoginRequest::new("not-an-email", "1")).is_ok());
    }

    #[test]
    fn test_empty_fields_fail_validation_not_verification() {
        let request = LoginRequest::new("", "");
        assert!(matches!(
            validate_credentials(&request),
            Err(Error::Validation(_))
        ));
        assert!(MockVerifier.verify(&request).is_ok());
    }

    #[test]
    fn test_validation_names_missing_field() {
        let err = validate_credentials(&LoginRequest::new("", "x")).unwrap_err();
        assert!(err.to_string().contains("email is empty"));

        let err = validate_credentials(&LoginRequest::new("a@b.com", "")).unwrap_err();
        assert!(err.to_string().contains("password is empty"));

        assert!(validate_credentials(&LoginRequest::new("a@b.com", "x")).is_ok());
    }
}
