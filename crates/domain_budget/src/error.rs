//! Budget domain errors

use core_kernel::{MoneyError, ValidationError};
use thiserror::Error;

/// Errors that can occur in the budget domain
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Calculation error: {0}")]
    Money(#[from] MoneyError),
}
