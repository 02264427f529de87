//! Analysis errors

use core_kernel::{MoneyError, ValidationError};
use domain_budget::BudgetError;
use domain_debt::DebtError;
use domain_investment::InvestmentError;
use thiserror::Error;

/// Errors returned by the analysis engine
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid engine configuration: {0}")]
    Configuration(ValidationError),

    #[error("Calculation error: {0}")]
    Money(#[from] MoneyError),
}

impl AnalysisError {
    /// The rejected field, for validation failures
    pub fn field(&self) -> Option<&str> {
        match self {
            AnalysisError::Validation(err) | AnalysisError::Configuration(err) => Some(&err.field),
            AnalysisError::Money(_) => None,
        }
    }
}

impl From<BudgetError> for AnalysisError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::Validation(e) => AnalysisError::Validation(e),
            BudgetError::Money(e) => AnalysisError::Money(e),
        }
    }
}

impl From<DebtError> for AnalysisError {
    fn from(err: DebtError) -> Self {
        match err {
            DebtError::Validation(e) => AnalysisError::Validation(e),
            DebtError::Money(e) => AnalysisError::Money(e),
        }
    }
}

impl From<InvestmentError> for AnalysisError {
    fn from(err: InvestmentError) -> Self {
        match err {
            InvestmentError::Validation(e) => AnalysisError::Validation(e),
            InvestmentError::Money(e) => AnalysisError::Money(e),
        }
    }
}
