//! Business layer errors
//!
//! Wraps core rejections and adds the ones that only make sense once
//! accounts live in a registry.

use minibank_core::CoreError;
use thiserror::Error;

/// Business operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusinessError {
    #[error("Account not found: #{0}")]
    AccountNotFound(usize),

    #[error("At least {required} accounts are needed, {available} registered")]
    NotEnoughAccounts { required: usize, available: usize },

    #[error("Source and destination must be different accounts")]
    SameAccountTransfer,

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for business operations
pub type BusinessResult<T> = Result<T, BusinessError>;

impl BusinessError {
    /// Create not enough accounts error
    pub fn not_enough_accounts(required: usize, available: usize) -> Self {
        Self::NotEnoughAccounts {
            required,
            available,
        }
    }

    /// Underlying core rejection, if any
    pub fn core(&self) -> Option<&CoreError> {
        match self {
            BusinessError::Core(err) => Some(err),
            _ => None,
        }
    }
}
