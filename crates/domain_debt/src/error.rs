//! Debt domain errors

use core_kernel::{MoneyError, ValidationError};
use thiserror::Error;

/// Errors that can occur in the debt domain
#[derive(Debug, Error)]
pub enum DebtError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Calculation error: {0}")]
    Money(#[from] MoneyError),
}
