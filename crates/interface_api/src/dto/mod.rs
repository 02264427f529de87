//! Request and response bodies
//!
//! Amounts arrive as plain decimals in the request's `currency`; rates are
//! fractions (`0.18` for 18%).

pub mod analysis;
pub mod debt;
pub mod investment;
pub mod planning;

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::ValidationError;

fn rejection(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

pub(crate) fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(rejection("non_negative", "must not be negative"));
    }
    Ok(())
}

pub(crate) fn fraction(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO || *value > Decimal::ONE {
        return Err(rejection("fraction", "must be between 0 and 1"));
    }
    Ok(())
}
