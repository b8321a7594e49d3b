//! Identity service payloads
//!
//! Credentials are transient: they exist only long enough to build a request
//! body and are wiped from memory when dropped.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Login payload for `POST /login`
#[derive(Clone, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration payload for `POST /signup`
#[derive(Clone, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl SignupRequest {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

/// Successful login response
///
/// Only `accessToken` is required; the identity service also reports the
/// user's display name and UUID.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user_uuid: Option<String>,
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("access_token", &"<redacted>")
            .field("name", &self.name)
            .field("user_uuid", &self.user_uuid)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_wire_shape() {
        let creds = Credentials::new("a@b.com", "pw123456");
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json, serde_json::json!({"email": "a@b.com", "password": "pw123456"}));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials::new("a@b.com", "pw123456");
        let signup = SignupRequest::new("a@b.com", "pw123456", "Kim");
        assert!(!format!("{:?}", creds).contains("pw123456"));
        assert!(!format!("{:?}", signup).contains("pw123456"));
    }

    #[test]
    fn test_login_response_optional_fields() {
        let bare: LoginResponse = serde_json::from_str(r#"{"accessToken":"T1"}"#).unwrap();
        assert_eq!(bare.access_token, "T1");
        assert_eq!(bare.name, None);

        let full: LoginResponse = serde_json::from_str(
            r#"{"accessToken":"T1","name":"Kim","userUuid":"u-1"}"#,
        )
        .unwrap();
        assert_eq!(full.name.as_deref(), Some("Kim"));
        assert_eq!(full.user_uuid.as_deref(), Some("u-1"));
        assert!(!format!("{:?}", full).contains("T1"));
    }
}
