//! Result and error types for the core library

use rust_decimal::Decimal;
use thiserror::Error;

use super::AccountId;

/// Core library error type
///
/// Every variant except `Io`, `Json`, `Config` and `InputClosed` is a
/// user-facing condition the dispatcher reports and recovers from.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid amount: must be greater than zero")]
    InvalidAmount,

    #[error("Amount out of range: the balance cannot hold it")]
    AmountOutOfRange,

    #[error("Insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds { available: Decimal, requested: Decimal },

    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Invalid credentials")]
    AuthenticationFailed,

    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    #[error("Invalid option: {0:?}")]
    InvalidMenuChoice(String),

    #[error("Not a valid number: {0:?}")]
    MalformedNumericInput(String),

    #[error("Invalid account type: {0:?} (expected Savings or Checking)")]
    InvalidAccountType(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a malformed numeric input error
    pub fn malformed(input: impl Into<String>) -> Self {
        Self::MalformedNumericInput(input.into())
    }

    /// True if the session can report this error and keep going
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::InputClosed | Self::Io(_) | Self::Json(_) | Self::Config(_)
        )
    }

    /// Message for the session event log
    ///
    /// Drops payloads that carry balances, amounts, usernames or raw input.
    /// Account numbers are kept.
    pub fn log_message(&self) -> String {
        match self {
            Self::InsufficientFunds { .. } => "Insufficient funds".to_string(),
            Self::DuplicateUsername(_) => "Username already taken".to_string(),
            Self::InvalidMenuChoice(_) => "Invalid option".to_string(),
            Self::MalformedNumericInput(_) => "Not a valid number".to_string(),
            Self::InvalidAccountType(_) => "Invalid account type".to_string(),
            other => other.to_string(),
        }
    }

    /// Short stable name used in the session event log
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "invalid_amount",
            Self::AmountOutOfRange => "amount_out_of_range",
            Self::InsufficientFunds { .. } => "insufficient_funds",
            Self::AccountNotFound(_) => "account_not_found",
            Self::AuthenticationFailed => "authentication_failed",
            Self::DuplicateUsername(_) => "duplicate_username",
            Self::InvalidMenuChoice(_) => "invalid_menu_choice",
            Self::MalformedNumericInput(_) => "malformed_numeric_input",
            Self::InvalidAccountType(_) => "invalid_account_type",
            Self::Validation(_) => "validation",
            Self::Config(_) => "config",
            Self::InputClosed => "input_closed",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
        }
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_funds_message() {
        let err = Error::InsufficientFunds {
            available: Decimal::new(1500, 0),
            requested: Decimal::new(2000, 0),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: available 1500, requested 2000"
        );
        assert_eq!(err.kind(), "insufficient_funds");
    }

    #[test]
    fn test_log_message_hides_payloads() {
        let err = Error::InsufficientFunds {
            available: Decimal::new(9876543, 2),
            requested: Decimal::new(999999, 0),
        };
        assert_eq!(err.log_message(), "Insufficient funds");
        assert!(!Error::DuplicateUsername("alice".to_string())
            .log_message()
            .contains("alice"));
        assert!(!Error::malformed("hunter2").log_message().contains("hunter2"));
        assert_eq!(
            Error::AccountNotFound(AccountId::new(100_000)).log_message(),
            "Account not found: 100000"
        );
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(Error::InvalidAmount.is_recoverable());
        assert!(Error::malformed("abc").is_recoverable());
        assert!(!Error::InputClosed.is_recoverable());
        assert!(!Error::config("bad rate").is_recoverable());
    }
}
