//! Input validation shared by the domain crates
//!
//! Every domain operation rejects out-of-domain input with a
//! [`ValidationError`] that names the offending field. Nothing is clamped
//! silently; the only tolerated degenerate input is a zero income, which the
//! domain crates handle themselves.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::{Currency, Money, Rate};

/// A rejected input field
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[error("Invalid {field}: {reason}")]
pub struct ValidationError {
    /// Path of the offending field, e.g. `debts[1].interest_rate`
    pub field: String,
    /// Human-readable reason
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Inclusive bounds for a rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateBounds {
    pub min: Rate,
    pub max: Rate,
}

impl RateBounds {
    pub fn new(min: Rate, max: Rate) -> Self {
        Self { min, max }
    }

    /// 0.1% to 30%, the accepted range for consumer debt
    pub fn debt_default() -> Self {
        Self::new(Rate::new(dec!(0.001)), Rate::new(dec!(0.30)))
    }

    /// 0% to 30% for expected investment returns
    pub fn investment_default() -> Self {
        Self::new(Rate::zero(), Rate::new(dec!(0.30)))
    }

    pub fn contains(&self, rate: Rate) -> bool {
        rate >= self.min && rate <= self.max
    }
}

/// Largest accepted input amount (one trillion in any currency)
///
/// Every computation in the engine stays well inside `Decimal` range for
/// amounts up to this ceiling.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

/// Decimal places accepted on input amounts
pub const AMOUNT_DP: u32 = 4;

/// Rejects negative amounts, amounts above [`MAX_AMOUNT`], and amounts with
/// more than [`AMOUNT_DP`] decimal places
pub fn ensure_amount(field: &str, value: &Money) -> Result<(), ValidationError> {
    let amount = value.amount();
    if value.is_negative() {
        return Err(ValidationError::new(
            field,
            format!("amount cannot be negative, got {}", amount),
        ));
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::new(
            field,
            format!("amount cannot exceed {}", MAX_AMOUNT),
        ));
    }
    if amount.normalize().scale() > AMOUNT_DP {
        return Err(ValidationError::new(
            field,
            format!("at most {} decimal places are accepted, got {}", AMOUNT_DP, amount),
        ));
    }
    Ok(())
}

/// Rejects amounts in a currency other than `expected`
pub fn ensure_currency(field: &str, value: &Money, expected: Currency) -> Result<(), ValidationError> {
    if value.currency() != expected {
        return Err(ValidationError::new(
            field,
            format!("expected {} but got {}", expected, value.currency()),
        ));
    }
    Ok(())
}

/// Rejects a rate outside `bounds`
pub fn ensure_rate_within(field: &str, rate: Rate, bounds: &RateBounds) -> Result<(), ValidationError> {
    if !bounds.contains(rate) {
        return Err(ValidationError::new(
            field,
            format!(
                "rate {} should be between {} and {}",
                rate, bounds.min, bounds.max
            ),
        ));
    }
    Ok(())
}

/// Rejects empty or whitespace-only names
pub fn ensure_not_blank(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}

/// Rejects a fraction outside `[0, 1]`
pub fn ensure_fraction(field: &str, value: Decimal) -> Result<(), ValidationError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(ValidationError::new(
            field,
            format!("must be between 0 and 1, got {}", value),
        ));
    }
    Ok(())
}
