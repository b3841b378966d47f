//! # Error Module
//!
//! Domain rejections for account operations, built with thiserror.
//! Every rejection leaves balances untouched.

use crate::account::AccountKind;
use rust_decimal::Decimal;
use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // === Amount errors ===
    #[error("Invalid amount: {0} (must be greater than 0)")]
    InvalidAmount(Decimal),

    #[error("Insufficient funds: need {needed}, available {available}")]
    InsufficientFunds { needed: Decimal, available: Decimal },

    #[error("Amount out of range: {0}")]
    AmountOverflow(Decimal),

    // === Opening errors ===
    #[error("Opening amount {offered} is below the minimum of {minimum} for this account kind")]
    BelowMinimumOpening { minimum: Decimal, offered: Decimal },

    #[error("Unknown account kind: {0}")]
    UnknownAccountKind(String),

    #[error("A guardian name is required for customers under 18")]
    GuardianRequired,

    // === Kind-specific operations ===
    #[error("Checks cannot be issued from a {0} account")]
    ChecksNotSupported(AccountKind),

    // === Configuration ===
    #[error("Invalid tariff: {0}")]
    InvalidTariff(String),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create an insufficient funds error
    pub fn insufficient_funds(needed: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds { needed, available }
    }

    /// Check whether this is an insufficient funds rejection
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, CoreError::InsufficientFunds { .. })
    }
}
