//! Error types for client-side input validation

use thiserror::Error;

/// Result type for validation of user-supplied input
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Input rejected before any request is built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Amount was empty or not a whole number
    #[error("Amount must be a whole number, got '{0}'")]
    AmountNotInteger(String),

    /// Amount was zero or negative
    #[error("Please enter the correct amount.")]
    AmountNotPositive(i64),

    /// Recipient account number was empty
    #[error("Recipient account number is required")]
    MissingRecipient,

    /// Account number cannot name a single account
    #[error("Invalid account number '{0}'")]
    InvalidAccountNumber(String),
}
