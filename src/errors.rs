use thiserror::Error;

/// Error type covering every outcome a ledger operation can fail with.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Authentication(#[from] AuthError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientFunds { requested: u64, available: u64 },
    #[error("No user logged in.")]
    NotAuthenticated,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LedgerError {
    /// Only storage failures end a session; everything else is an expected outcome.
    pub fn is_fatal(&self) -> bool {
        matches!(self, LedgerError::Io(_))
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Config(err.to_string())
    }
}

/// Reasons a PIN was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter your PIN.")]
    EmptyPin,
    #[error("Invalid PIN.")]
    UnknownPin,
    #[error("Current PIN is incorrect.")]
    IncorrectPin,
}

/// Reasons user-supplied text was rejected before touching an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid positive number.")]
    InvalidAmount,
    #[error("Amount must be greater than 0.")]
    NonPositiveAmount,
    #[error("Amount is too large.")]
    AmountTooLarge,
    #[error("New PINs do not match.")]
    PinMismatch,
    #[error("New PIN must be exactly 4 digits.")]
    PinFormat,
}

pub type Result<T> = std::result::Result<T, LedgerError>;
