//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The first three variants are the business failures a client can trigger.
/// `Validation` covers input rejected before it reaches the ledger and
/// `Internal` covers faults that are never the caller's fault.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Identity lookup miss.
    #[error("Customer does not exist!")]
    NotFound,

    /// Duplicate identity at creation.
    #[error("{0}")]
    Conflict(String),

    /// Withdraw would take the balance below zero.
    #[error("Insufficient funds!")]
    InsufficientFunds { balance: f64, requested: f64 },

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Unexpected fault (poisoned state, broken invariant).
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn insufficient_funds(balance: f64, requested: f64) -> Self {
        Self::InsufficientFunds { balance, requested }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
