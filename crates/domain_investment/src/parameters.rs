//! Projection inputs and limits

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::validation::{ensure_currency, ensure_amount, ensure_rate_within};
use core_kernel::{Money, Rate, RateBounds, ValidationError};

/// What is invested, how much is added monthly, and for how long
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentParameters {
    /// Current portfolio value
    pub principal: Money,
    /// Amount added at the end of every month
    pub monthly_contribution: Money,
    /// Expected annual return as a fraction
    pub annual_rate: Rate,
    /// Horizon in whole years
    pub years: u32,
}

impl InvestmentParameters {
    pub fn new(principal: Money, monthly_contribution: Money, annual_rate: Rate, years: u32) -> Self {
        Self {
            principal,
            monthly_contribution,
            annual_rate,
            years,
        }
    }

    /// True when there is money invested or being invested
    pub fn is_active(&self) -> bool {
        self.principal.is_positive() || self.monthly_contribution.is_positive()
    }

    pub fn validate(&self, policy: &InvestmentPolicy) -> Result<(), ValidationError> {
        ensure_amount("investment.principal", &self.principal)?;
        ensure_currency(
            "investment.monthly_contribution",
            &self.monthly_contribution,
            self.principal.currency(),
        )?;
        ensure_amount("investment.monthly_contribution", &self.monthly_contribution)?;
        ensure_rate_within("investment.annual_rate", self.annual_rate, &policy.rate_bounds)?;

        if self.years < 1 {
            return Err(ValidationError::new("investment.years", "horizon must be at least 1 year"));
        }
        if self.years > policy.max_years {
            return Err(ValidationError::new(
                "investment.years",
                format!("horizon must not exceed {} years", policy.max_years),
            ));
        }
        Ok(())
    }
}

/// Accepted return rates and horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestmentPolicy {
    pub rate_bounds: RateBounds,
    pub max_years: u32,
}

impl Default for InvestmentPolicy {
    fn default() -> Self {
        Self {
            rate_bounds: RateBounds::investment_default(),
            max_years: 100,
        }
    }
}

impl InvestmentPolicy {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.rate_bounds.min > self.rate_bounds.max {
            return Err(ValidationError::new(
                "investment.rate_bounds",
                "minimum must not exceed maximum",
            ));
        }
        if self.rate_bounds.max > Rate::new(Decimal::ONE) {
            return Err(ValidationError::new(
                "investment.rate_bounds",
                "maximum must not exceed 100%",
            ));
        }
        if self.max_years < 1 {
            return Err(ValidationError::new("investment.max_years", "must be at least 1"));
        }
        Ok(())
    }
}
