//! Client error taxonomy
//!
//! Every failure resolves to one of four kinds:
//!
//! | Kind         | Cause                                         |
//! |--------------|-----------------------------------------------|
//! | `Validation` | bad input caught before any request is built  |
//! | `AuthExpired`| HTTP 401 on an authenticated call             |
//! | `Server`     | any other non-2xx, or an undecodable 2xx body |
//! | `Network`    | no response (connectivity, request setup)     |
//!
//! Components forward the most specific classification and never retry.

use serde::Deserialize;
use ssobank_types::ValidationError;
use thiserror::Error;

/// Result type for dispatch and fetch operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type for transfer submission
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Errors surfaced by `AccountAggregator::load`
pub type FetchError = ClientError;

/// Result type for aggregated fetches
pub type FetchResult<T> = Result<T, FetchError>;

/// Message shown when a session expires
pub const SESSION_EXPIRED_MESSAGE: &str = "Session has expired. Please log in again.";

/// Closed classification shared by every client error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    AuthExpired,
    Server,
    Network,
}

/// Anything that can be classified into an `ErrorKind`
pub trait Classify {
    fn kind(&self) -> ErrorKind;

    fn is_auth_expired(&self) -> bool {
        self.kind() == ErrorKind::AuthExpired
    }
}

/// User-facing operation, used to pick a fallback message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    Signup,
    Transfer,
    LoadAccount,
}

impl Operation {
    /// Generic message when the server supplied none
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Login => "An error occurred during login.",
            Self::Signup => "An error occurred during sign-up.",
            Self::Transfer => "An error occurred during the transfer.",
            Self::LoadAccount => "Failed to load account data.",
        }
    }
}

/// Errors from a single HTTP dispatch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Rejected before any request was built
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The banking service rejected the credential (HTTP 401)
    #[error("Session has expired")]
    AuthExpired,

    /// Non-2xx response other than 401
    #[error("Server returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server {
        status: u16,
        /// The `message` field of the error body, when present
        message: Option<String>,
    },

    /// No response was received
    #[error("Network error: {0}")]
    Network(String),
}

impl ClientError {
    pub fn server(status: u16, message: Option<String>) -> Self {
        Self::Server { status, message }
    }

    /// Server-supplied message, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status, when a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthExpired => Some(401),
            Self::Server { status, .. } => Some(*status),
            Self::Validation(_) | Self::Network(_) => None,
        }
    }

    /// Display string for the given operation
    pub fn user_message(&self, operation: Operation) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::AuthExpired => SESSION_EXPIRED_MESSAGE.to_string(),
            Self::Server {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Server { message: None, .. } | Self::Network(_) => {
                operation.default_message().to_string()
            }
        }
    }
}

impl Classify for ClientError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::AuthExpired => ErrorKind::AuthExpired,
            Self::Server { .. } => ErrorKind::Server,
            Self::Network(_) => ErrorKind::Network,
        }
    }
}

/// Errors from `TransferSubmitter`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Rejected before any network call
    #[error("Invalid transfer: {0}")]
    Validation(#[from] ValidationError),

    #[error("Session has expired")]
    AuthExpired,

    #[error("Server returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server {
        status: u16,
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(String),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::AuthExpired => SESSION_EXPIRED_MESSAGE.to_string(),
            Self::Server {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Server { message: None, .. } | Self::Network(_) => {
                Operation::Transfer.default_message().to_string()
            }
        }
    }
}

impl Classify for SubmitError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::AuthExpired => ErrorKind::AuthExpired,
            Self::Server { .. } => ErrorKind::Server,
            Self::Network(_) => ErrorKind::Network,
        }
    }
}

impl From<ClientError> for SubmitError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Validation(err) => Self::Validation(err),
            ClientError::AuthExpired => Self::AuthExpired,
            ClientError::Server { status, message } => Self::Server { status, message },
            ClientError::Network(message) => Self::Network(message),
        }
    }
}

/// Error body returned by both services
///
/// The identity service answers `{status, message}` and the banking service
/// `{status, message, data}`; only `message` matters here.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    /// Extract a non-blank message from a raw error body
    pub(crate) fn message_from(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}
