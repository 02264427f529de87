//! Compound-growth projection

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{round_currency, Money, MoneyError};

use crate::error::InvestmentError;
use crate::parameters::{InvestmentParameters, InvestmentPolicy};
use crate::MONTHS_PER_YEAR;

/// Portfolio state at the end of a month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthPoint {
    /// 1-based month index
    pub month: u32,
    /// Portfolio value
    pub balance: Money,
    /// Initial principal (constant across the series)
    pub principal: Money,
    /// Monthly contributions made so far
    pub contributions: Money,
    /// Interest earned so far
    pub interest: Money,
}

impl GrowthPoint {
    /// Principal plus contributions to date
    pub fn invested(&self) -> Money {
        Money::new(
            self.principal.amount() + self.contributions.amount(),
            self.principal.currency(),
        )
    }

    /// Completed years at this point, if it falls on a year end
    pub fn year(&self) -> Option<u32> {
        (self.month % MONTHS_PER_YEAR == 0).then_some(self.month / MONTHS_PER_YEAR)
    }
}

/// A month-by-month projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthProjection {
    pub parameters: InvestmentParameters,
    /// One point per month, `years * 12` in total
    pub points: Vec<GrowthPoint>,
}

impl GrowthProjection {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn final_point(&self) -> Option<&GrowthPoint> {
        self.points.last()
    }

    /// Year-end points, one per projected year
    pub fn yearly_snapshots(&self) -> Vec<GrowthPoint> {
        self.points.iter().filter(|p| p.year().is_some()).copied().collect()
    }

    /// Principal plus all contributions over the horizon
    pub fn total_invested(&self) -> Money {
        self.final_point()
            .map(GrowthPoint::invested)
            .unwrap_or(self.parameters.principal)
    }

    /// Final value over everything invested; 1 when nothing was invested
    pub fn growth_multiple(&self) -> Decimal {
        match self.final_point() {
            Some(point) if point.invested().is_positive() => point
                .balance
                .amount()
                .checked_div(point.invested().amount())
                .unwrap_or(Decimal::MAX),
            _ => Decimal::ONE,
        }
    }
}

/// Projects a portfolio forward with monthly compounding
///
/// # Arguments
///
/// * `params` - Principal, monthly contribution, annual rate, and horizon
/// * `policy` - Accepted rates and maximum horizon
///
/// # Returns
///
/// `years * 12` growth points. Identical inputs always yield identical output.
pub fn project_investment_growth(
    params: &InvestmentParameters,
    policy: &InvestmentPolicy,
) -> Result<GrowthProjection, InvestmentError> {
    params.validate(policy)?;

    let currency = params.principal.currency();
    let monthly_rate = params.annual_rate.monthly();
    let contribution = params.monthly_contribution.amount();
    let principal = params.principal.amount();
    let months = params.years * MONTHS_PER_YEAR;

    let mut balance = principal;
    let mut contributions = Decimal::ZERO;
    let mut interest = Decimal::ZERO;
    let mut points = Vec::with_capacity(months as usize);

    for month in 1..=months {
        let earned = balance
            .checked_mul(monthly_rate)
            .map(round_currency)
            .ok_or(MoneyError::Overflow)?;
        balance = balance
            .checked_add(earned)
            .and_then(|b| b.checked_add(contribution))
            .ok_or(MoneyError::Overflow)?;
        // both stay below the balance, so plain addition cannot overflow
        interest += earned;
        contributions += contribution;

        points.push(GrowthPoint {
            month,
            balance: Money::new(balance, currency),
            principal: params.principal,
            contributions: Money::new(contributions, currency),
            interest: Money::new(interest, currency),
        });
    }

    debug!(
        months,
        final_balance = %Money::new(balance, currency),
        "Projected investment growth"
    );

    Ok(GrowthProjection {
        parameters: params.clone(),
        points,
    })
}
