//! Session state held by the client

use serde::{Deserialize, Serialize};

/// The current access credential, if any
///
/// Absence of a token means the client is unauthenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl Session {
    /// An unauthenticated session
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session carrying the given token
    ///
    /// Blank tokens collapse to an anonymous session.
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            Self::anonymous()
        } else {
            Self {
                access_token: Some(trimmed.to_string()),
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Value of the `Authorization` header for this session
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }
}
