//! Contract-specific error types
//!
//! Comprehensive error taxonomy for whitelist, custody, oracle, condition,
//! and withdrawal operations. Every error aborts the whole operation with
//! no partial state mutation; nothing is retried internally.

use thiserror::Error;

/// Whitelist sequence errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Whitelist index out of range: {index} (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Vault (custody ledger) errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VaultError {
    #[error("Unauthorized: caller is not the owner")]
    Unauthorized,

    #[error("Not a valid token: {token}")]
    InvalidToken { token: String },

    #[error("Token not whitelisted: {token}")]
    TokenNotWhitelisted { token: String },

    #[error("Amount must be positive")]
    InvalidAmount,

    #[error("Token transfer failed: {token}")]
    TransferFailed { token: String },

    #[error("Insufficient balance for {token}: required {required}, available {available}")]
    InsufficientBalance {
        token: String,
        required: String,
        available: String,
    },

    #[error("Deposit index out of range: {index}")]
    IndexOutOfRange { index: usize },

    #[error("Vault is paused")]
    Paused,

    #[error("Reentrancy detected")]
    Reentrancy,

    #[error("Arithmetic overflow in balance calculation")]
    Overflow,

    #[error("Whitelist error: {0}")]
    Registry(#[from] RegistryError),
}

/// Price oracle errors
///
/// Both variants are fatal to the calling operation: a condition cannot be
/// evaluated without a current reading.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OracleError {
    #[error("Oracle unavailable for feed {feed}")]
    Unavailable { feed: String },

    #[error("Oracle returned an invalid reading for feed {feed}")]
    InvalidReading { feed: String },
}

/// Condition evaluation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConditionError {
    #[error("Deposit index out of range: {index}")]
    IndexOutOfRange { index: usize },

    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),
}

/// Conditional withdrawal errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WithdrawalError {
    #[error("Deposit index out of range: {index}")]
    IndexOutOfRange { index: usize },

    #[error("Deposit already consumed: index {index}")]
    AlreadyConsumed { index: usize },

    #[error("Release condition not met for deposit {index}")]
    ConditionNotMet { index: usize },

    #[error("Token transfer failed: {token}")]
    TransferFailed { token: String },

    #[error("Vault is paused")]
    Paused,

    #[error("Reentrancy detected")]
    Reentrancy,

    #[error("Condition error: {0}")]
    Condition(#[from] ConditionError),

    #[error("Vault error: {0}")]
    Vault(#[from] VaultError),
}
