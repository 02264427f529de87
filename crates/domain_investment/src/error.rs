//! Investment domain errors

use core_kernel::{MoneyError, ValidationError};
use thiserror::Error;

/// Errors that can occur in the investment domain
#[derive(Debug, Error)]
pub enum InvestmentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Calculation error: {0}")]
    Money(#[from] MoneyError),
}
