//! Investment projection DTOs

use core_kernel::{Currency, Money, Rate};
use domain_investment::{GrowthPoint, GrowthProjection, InvestmentParameters};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{fraction, non_negative};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InvestmentRequest {
    #[validate(custom(function = "non_negative"))]
    pub principal: Decimal,
    #[validate(custom(function = "non_negative"))]
    pub monthly_contribution: Decimal,
    #[validate(custom(function = "fraction"))]
    pub annual_rate: Decimal,
    #[validate(range(min = 1, max = 100))]
    pub years: u32,
}

impl InvestmentRequest {
    pub fn to_parameters(&self, currency: Currency) -> InvestmentParameters {
        InvestmentParameters::new(
            Money::new(self.principal, currency),
            Money::new(self.monthly_contribution, currency),
            Rate::new(self.annual_rate),
            self.years,
        )
    }
}

/// Granularity of the returned series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    #[default]
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProjectionRequest {
    #[serde(default)]
    pub currency: Currency,
    #[serde(flatten)]
    #[validate(nested)]
    pub investment: InvestmentRequest,
    #[serde(default)]
    pub resolution: Resolution,
}

#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub final_balance: Money,
    pub total_invested: Money,
    pub total_interest: Money,
    pub growth_multiple: Decimal,
    pub resolution: Resolution,
    pub points: Vec<GrowthPoint>,
}

impl ProjectionResponse {
    pub fn new(projection: &GrowthProjection, resolution: Resolution) -> Self {
        let currency = projection.parameters.principal.currency();
        let total_interest = projection
            .final_point()
            .map(|p| p.interest)
            .unwrap_or_else(|| Money::zero(currency));
        let final_balance = projection
            .final_point()
            .map(|p| p.balance)
            .unwrap_or(projection.parameters.principal);
        let points = match resolution {
            Resolution::Monthly => projection.points.clone(),
            Resolution::Yearly => projection.yearly_snapshots(),
        };

        Self {
            final_balance,
            total_invested: projection.total_invested(),
            total_interest,
            growth_multiple: projection.growth_multiple(),
            resolution,
            points,
        }
    }
}
