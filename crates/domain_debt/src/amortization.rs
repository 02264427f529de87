//! Closed-form payoff time for a single debt

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

/// How long a debt takes to reach zero at a fixed monthly payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "months", rename_all = "snake_case")]
pub enum PayoffOutcome {
    /// Nothing is owed
    PaidOff,
    /// Zero balance after this many monthly payments
    Months(u32),
    /// The payment does not cover accruing interest
    Never,
}

impl PayoffOutcome {
    /// Months to zero, or `None` when the debt is never paid off
    pub fn months(&self) -> Option<u32> {
        match self {
            PayoffOutcome::PaidOff => Some(0),
            PayoffOutcome::Months(n) => Some(*n),
            PayoffOutcome::Never => None,
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, PayoffOutcome::Never)
    }
}

/// Months to pay off `balance` at `payment` per month
///
/// Uses `n = ceil(-ln(1 - B*r/P) / ln(1 + r))` with `r = annual_rate / 12`.
/// A payment that does not exceed the first month's interest (`P <= B*r`)
/// yields [`PayoffOutcome::Never`].
///
/// # Example
///
/// ```rust
/// use core_kernel::{Money, Rate};
/// use domain_debt::{payoff_months, PayoffOutcome};
/// use rust_decimal_macros::dec;
///
/// let outcome = payoff_months(
///     &Money::usd(dec!(1000)),
///     Rate::from_percentage(dec!(12)),
///     &Money::usd(dec!(100)),
/// );
/// assert_eq!(outcome, PayoffOutcome::Months(11));
/// ```
pub fn payoff_months(balance: &Money, annual_rate: Rate, payment: &Money) -> PayoffOutcome {
    let b = balance.amount();
    let p = payment.amount();

    if b <= Decimal::ZERO {
        return PayoffOutcome::PaidOff;
    }
    if p <= Decimal::ZERO {
        return PayoffOutcome::Never;
    }

    let r = annual_rate.monthly();
    if r.is_zero() {
        return to_outcome((b / p).ceil());
    }

    let interest = b * r;
    if p <= interest {
        return PayoffOutcome::Never;
    }

    // 0 < remaining < 1 here, so both logarithms are well defined
    let remaining = Decimal::ONE - interest / p;
    let n = -remaining.ln() / (Decimal::ONE + r).ln();

    // ln is approximate; trim its noise before taking the ceiling
    to_outcome(n.round_dp(8).ceil())
}

fn to_outcome(months: Decimal) -> PayoffOutcome {
    match months.to_u32() {
        Some(n) => PayoffOutcome::Months(n.max(1)),
        None => PayoffOutcome::Never,
    }
}
