//! Retirement nest-egg estimate
//!
//! The nest egg is the capital whose real (inflation-adjusted) return pays
//! the yearly income gap forever:
//!
//! ```text
//! real_return = (1 + expected_return) / (1 + inflation) - 1
//! nest_egg    = annual_gap / real_return
//! ```
//!
//! When the real return is zero or negative the perpetuity is undefined and
//! the estimate falls back to [`FALLBACK_YEARS`] years of the gap.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::validation::{ensure_amount, ensure_currency, ensure_rate_within};
use core_kernel::{Money, MoneyError, Rate, RateBounds, ValidationError};

use crate::error::InvestmentError;
use crate::MONTHS_PER_YEAR;

/// Years of income gap used when the real return is not positive
pub const FALLBACK_YEARS: u32 = 30;

/// Ages, income needs, and rate assumptions for one household
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementParameters {
    pub current_age: u32,
    pub retirement_age: u32,
    /// Monthly income wanted in retirement
    pub desired_monthly_income: Money,
    /// Pension or social security expected per month
    pub guaranteed_monthly_income: Money,
    /// Expected annual return during retirement
    pub expected_return: Rate,
    pub inflation: Rate,
}

/// Accepted ages and rate assumptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetirementPolicy {
    pub min_age: u32,
    pub max_retirement_age: u32,
    pub return_bounds: RateBounds,
    pub inflation_bounds: RateBounds,
}

impl Default for RetirementPolicy {
    fn default() -> Self {
        Self {
            min_age: 18,
            max_retirement_age: 100,
            return_bounds: RateBounds::investment_default(),
            inflation_bounds: RateBounds::new(Rate::zero(), Rate::new(dec!(0.20))),
        }
    }
}

impl RetirementPolicy {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_age >= self.max_retirement_age {
            return Err(ValidationError::new(
                "retirement.max_retirement_age",
                "must be above the minimum age",
            ));
        }
        for (field, bounds) in [
            ("retirement.return_bounds", self.return_bounds),
            ("retirement.inflation_bounds", self.inflation_bounds),
        ] {
            if bounds.min > bounds.max || bounds.min < Rate::zero() || bounds.max > Rate::new(Decimal::ONE) {
                return Err(ValidationError::new(field, "must lie within 0% and 100%"));
            }
        }
        Ok(())
    }
}

impl RetirementParameters {
    pub fn validate(&self, policy: &RetirementPolicy) -> Result<(), ValidationError> {
        if self.current_age < policy.min_age {
            return Err(ValidationError::new(
                "retirement.current_age",
                format!("must be at least {}", policy.min_age),
            ));
        }
        if self.retirement_age <= self.current_age {
            return Err(ValidationError::new(
                "retirement.retirement_age",
                "must be after the current age",
            ));
        }
        if self.retirement_age > policy.max_retirement_age {
            return Err(ValidationError::new(
                "retirement.retirement_age",
                format!("must not exceed {}", policy.max_retirement_age),
            ));
        }

        let currency = self.desired_monthly_income.currency();
        ensure_amount("retirement.desired_monthly_income", &self.desired_monthly_income)?;
        ensure_currency(
            "retirement.guaranteed_monthly_income",
            &self.guaranteed_monthly_income,
            currency,
        )?;
        ensure_amount("retirement.guaranteed_monthly_income", &self.guaranteed_monthly_income)?;
        ensure_rate_within("retirement.expected_return", self.expected_return, &policy.return_bounds)?;
        ensure_rate_within("retirement.inflation", self.inflation, &policy.inflation_bounds)?;
        Ok(())
    }

    pub fn years_to_retirement(&self) -> u32 {
        self.retirement_age.saturating_sub(self.current_age)
    }
}

/// Required nest egg and how far the projected portfolio falls short
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementPlan {
    pub years_to_retirement: u32,
    /// Desired income not covered by guaranteed income, per month
    pub monthly_gap: Money,
    /// Inflation-adjusted return; `None` when no gap needs funding
    pub real_return: Option<Decimal>,
    pub nest_egg: Money,
    /// Portfolio value the current plan reaches
    pub projected_portfolio: Money,
    /// `nest_egg - projected_portfolio`, never negative
    pub shortfall: Money,
    /// Extra monthly saving that closes the shortfall, ignoring compounding
    pub monthly_extra_saving: Money,
}

impl RetirementPlan {
    pub fn is_on_track(&self) -> bool {
        self.shortfall.is_zero()
    }
}

/// Estimates the nest egg needed for retirement and the gap to it
///
/// # Arguments
///
/// * `params` - Ages, desired and guaranteed income, return and inflation
/// * `projected_portfolio` - Portfolio value expected at retirement
/// * `policy` - Accepted ages and rates
pub fn plan_retirement(
    params: &RetirementParameters,
    projected_portfolio: &Money,
    policy: &RetirementPolicy,
) -> Result<RetirementPlan, InvestmentError> {
    params.validate(policy)?;
    let currency = params.desired_monthly_income.currency();
    ensure_currency("retirement.projected_portfolio", projected_portfolio, currency)?;

    let years = params.years_to_retirement();
    let monthly_gap = params
        .desired_monthly_income
        .checked_sub(&params.guaranteed_monthly_income)?
        .non_negative();

    let (real_return, nest_egg) = if monthly_gap.is_zero() {
        (None, Money::zero(currency))
    } else {
        let annual_gap = monthly_gap.amount() * Decimal::from(MONTHS_PER_YEAR);
        let real = real_return(params.expected_return, params.inflation)?;
        let needed = if real <= Decimal::ZERO {
            annual_gap * Decimal::from(FALLBACK_YEARS)
        } else {
            annual_gap.checked_div(real).ok_or(MoneyError::Overflow)?
        };
        (Some(real), Money::new(needed, currency).round_to_currency())
    };

    let shortfall = nest_egg.checked_sub(projected_portfolio)?.non_negative();
    let monthly_extra_saving = Money::new(
        shortfall.amount() / Decimal::from(years * MONTHS_PER_YEAR),
        currency,
    )
    .round_to_currency();

    debug!(
        years,
        nest_egg = %nest_egg,
        shortfall = %shortfall,
        "Planned retirement"
    );

    Ok(RetirementPlan {
        years_to_retirement: years,
        monthly_gap,
        real_return,
        nest_egg,
        projected_portfolio: *projected_portfolio,
        shortfall,
        monthly_extra_saving,
    })
}

/// `(1 + nominal) / (1 + inflation) - 1`
pub fn real_return(nominal: Rate, inflation: Rate) -> Result<Decimal, MoneyError> {
    (Decimal::ONE + nominal.as_decimal())
        .checked_div(Decimal::ONE + inflation.as_decimal())
        .map(|ratio| ratio - Decimal::ONE)
        .ok_or(MoneyError::DivisionByZero)
}
