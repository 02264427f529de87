//! Composite financial health score
//!
//! Four sub-scores, each in `[0, 100]`, are combined with fixed weights:
//!
//! | sub-score             | default weight |
//! |-----------------------|----------------|
//! | budget balance        | 30%            |
//! | debt burden           | 30%            |
//! | savings rate          | 25%            |
//! | investment trajectory | 15%            |
//!
//! The weighted sum is rounded half-up to an integer and clamped to `[0, 100]`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::validation::ensure_fraction;
use core_kernel::ValidationError;
use domain_budget::{BudgetBreakdown, SavingsReport};
use domain_debt::DebtReport;
use domain_investment::GrowthProjection;

const HUNDRED: Decimal = dec!(100);

/// Weights as whole percentages; they always sum to 100 (i.e. 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WeightsRepr")]
pub struct HealthWeights {
    budget: u8,
    debt: u8,
    savings: u8,
    investment: u8,
}

#[derive(Deserialize)]
struct WeightsRepr {
    budget: u8,
    debt: u8,
    savings: u8,
    investment: u8,
}

impl TryFrom<WeightsRepr> for HealthWeights {
    type Error = ValidationError;

    fn try_from(repr: WeightsRepr) -> Result<Self, Self::Error> {
        HealthWeights::new(repr.budget, repr.debt, repr.savings, repr.investment)
    }
}

impl HealthWeights {
    pub const DEFAULT: HealthWeights = HealthWeights {
        budget: 30,
        debt: 30,
        savings: 25,
        investment: 15,
    };

    /// Creates weights, rejecting any set that does not sum to 100
    pub fn new(budget: u8, debt: u8, savings: u8, investment: u8) -> Result<Self, ValidationError> {
        let weights = Self {
            budget,
            debt,
            savings,
            investment,
        };
        if weights.total() != 100 {
            return Err(ValidationError::new(
                "health.weights",
                format!("weights must sum to 100, got {}", weights.total()),
            ));
        }
        Ok(weights)
    }

    pub const fn total(&self) -> u32 {
        self.budget as u32 + self.debt as u32 + self.savings as u32 + self.investment as u32
    }

    /// Weight of a sub-score as a fraction of 1
    pub fn fraction_for(&self, sub: &SubScore) -> Decimal {
        let percent = match sub {
            SubScore::BudgetBalance(_) => self.budget,
            SubScore::DebtBurden(_) => self.debt,
            SubScore::SavingsRate(_) => self.savings,
            SubScore::InvestmentTrajectory(_) => self.investment,
        };
        Decimal::from(percent) / HUNDRED
    }
}

const _: () = assert!(HealthWeights::DEFAULT.total() == 100);

impl Default for HealthWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Targets each sub-score is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthPolicy {
    pub weights: HealthWeights,
    /// Surplus as a fraction of income that earns a full budget score
    pub target_surplus: Decimal,
    /// Savings rate that earns a full savings score
    pub target_savings_rate: Decimal,
    /// DTI at or below this earns a full debt score
    pub dti_healthy: Decimal,
    /// DTI above this earns no debt score
    pub dti_ceiling: Decimal,
    /// Growth multiple (final value / invested) that maxes the investment score
    pub target_growth_multiple: Decimal,
}

impl Default for HealthPolicy {
    fn default() -> Self {
        Self {
            weights: HealthWeights::DEFAULT,
            target_surplus: dec!(0.20),
            target_savings_rate: dec!(0.20),
            dti_healthy: dec!(0.15),
            dti_ceiling: dec!(0.36),
            target_growth_multiple: dec!(1.5),
        }
    }
}

impl HealthPolicy {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_fraction("health.target_surplus", self.target_surplus)?;
        ensure_fraction("health.target_savings_rate", self.target_savings_rate)?;
        ensure_fraction("health.dti_healthy", self.dti_healthy)?;
        ensure_fraction("health.dti_ceiling", self.dti_ceiling)?;
        if self.target_surplus.is_zero() || self.target_savings_rate.is_zero() {
            return Err(ValidationError::new("health", "targets must be positive"));
        }
        if self.dti_healthy >= self.dti_ceiling {
            return Err(ValidationError::new(
                "health.dti_ceiling",
                "must be greater than dti_healthy",
            ));
        }
        if self.target_growth_multiple <= Decimal::ONE {
            return Err(ValidationError::new(
                "health.target_growth_multiple",
                "must be greater than 1",
            ));
        }
        Ok(())
    }
}

/// One normalized component of the health score, in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "score", rename_all = "snake_case")]
pub enum SubScore {
    BudgetBalance(Decimal),
    DebtBurden(Decimal),
    SavingsRate(Decimal),
    InvestmentTrajectory(Decimal),
}

impl SubScore {
    pub fn value(&self) -> Decimal {
        match self {
            SubScore::BudgetBalance(v)
            | SubScore::DebtBurden(v)
            | SubScore::SavingsRate(v)
            | SubScore::InvestmentTrajectory(v) => *v,
        }
    }

    fn clamped(self) -> Self {
        let clamp = |v: Decimal| v.max(Decimal::ZERO).min(HUNDRED);
        match self {
            SubScore::BudgetBalance(v) => SubScore::BudgetBalance(clamp(v)),
            SubScore::DebtBurden(v) => SubScore::DebtBurden(clamp(v)),
            SubScore::SavingsRate(v) => SubScore::SavingsRate(clamp(v)),
            SubScore::InvestmentTrajectory(v) => SubScore::InvestmentTrajectory(clamp(v)),
        }
    }
}

/// A sub-score with its weight and contribution to the total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedSubScore {
    pub sub_score: SubScore,
    /// Fraction of 1
    pub weight: Decimal,
    /// `sub_score * weight`
    pub contribution: Decimal,
}

/// Rating bands shown alongside the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthRating {
    Excellent,
    Fair,
    NeedsWork,
}

impl HealthRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            70..=u8::MAX => HealthRating::Excellent,
            40..=69 => HealthRating::Fair,
            _ => HealthRating::NeedsWork,
        }
    }
}

/// Debt-to-income band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DtiBand {
    Healthy,
    Moderate,
    High,
}

impl DtiBand {
    pub fn classify(dti: Decimal, policy: &HealthPolicy) -> Self {
        if dti <= policy.dti_healthy {
            DtiBand::Healthy
        } else if dti <= policy.dti_ceiling {
            DtiBand::Moderate
        } else {
            DtiBand::High
        }
    }
}

/// The composite score and how it was built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthScore {
    /// Integer in `[0, 100]`
    pub score: u8,
    pub rating: HealthRating,
    pub components: Vec<WeightedSubScore>,
}

impl HealthScore {
    pub fn component(&self, matches: impl Fn(&SubScore) -> bool) -> Option<&WeightedSubScore> {
        self.components.iter().find(|c| matches(&c.sub_score))
    }
}

/// Investment activity seen by the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentSignal {
    pub active: bool,
    pub growth_multiple: Decimal,
}

/// Everything the score reads from the domain reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthInputs {
    /// Surplus over income (may be negative)
    pub savings_potential: Decimal,
    pub savings_rate: Decimal,
    pub dti: Decimal,
    pub has_debt: bool,
    pub zero_income: bool,
    pub investment: Option<InvestmentSignal>,
}

impl HealthInputs {
    /// Collects the score inputs from the domain reports
    pub fn from_reports(
        budget: &BudgetBreakdown,
        savings: &SavingsReport,
        debt: &DebtReport,
        investment: Option<&GrowthProjection>,
    ) -> Self {
        Self {
            savings_potential: budget.savings_potential,
            savings_rate: savings.rate,
            dti: debt.dti,
            has_debt: debt.has_debt(),
            zero_income: budget.zero_income,
            investment: investment.map(|projection| InvestmentSignal {
                active: projection.parameters.is_active(),
                growth_multiple: projection.growth_multiple(),
            }),
        }
    }
}

fn budget_balance(inputs: &HealthInputs, policy: &HealthPolicy) -> SubScore {
    SubScore::BudgetBalance(inputs.savings_potential / policy.target_surplus * HUNDRED)
}

fn debt_burden(inputs: &HealthInputs, policy: &HealthPolicy) -> SubScore {
    // Any debt with no income to service it is the worst case
    if inputs.zero_income && inputs.has_debt {
        return SubScore::DebtBurden(Decimal::ZERO);
    }
    let value = match DtiBand::classify(inputs.dti, policy) {
        DtiBand::Healthy => HUNDRED,
        DtiBand::Moderate => {
            let span = policy.dti_ceiling - policy.dti_healthy;
            HUNDRED * (Decimal::ONE - (inputs.dti - policy.dti_healthy) / span)
        }
        DtiBand::High => Decimal::ZERO,
    };
    SubScore::DebtBurden(value)
}

fn savings_rate(inputs: &HealthInputs, policy: &HealthPolicy) -> SubScore {
    SubScore::SavingsRate(inputs.savings_rate / policy.target_savings_rate * HUNDRED)
}

fn investment_trajectory(inputs: &HealthInputs, policy: &HealthPolicy) -> SubScore {
    let value = match inputs.investment {
        Some(signal) if signal.active => {
            let progress = (signal.growth_multiple - Decimal::ONE)
                / (policy.target_growth_multiple - Decimal::ONE);
            dec!(50) + dec!(50) * progress.max(Decimal::ZERO).min(Decimal::ONE)
        }
        _ => Decimal::ZERO,
    };
    SubScore::InvestmentTrajectory(value)
}

/// Scores overall financial health from 0 to 100
///
/// # Arguments
///
/// * `inputs` - Figures taken from the budget, savings, debt and investment reports
/// * `policy` - Weights and targets
pub fn score_financial_health(inputs: &HealthInputs, policy: &HealthPolicy) -> HealthScore {
    let components: Vec<WeightedSubScore> = [
        budget_balance(inputs, policy),
        debt_burden(inputs, policy),
        savings_rate(inputs, policy),
        investment_trajectory(inputs, policy),
    ]
    .into_iter()
    .map(|raw| {
        let sub_score = raw.clamped();
        let weight = policy.weights.fraction_for(&sub_score);
        WeightedSubScore {
            sub_score,
            weight,
            contribution: sub_score.value() * weight,
        }
    })
    .collect();

    let total: Decimal = components.iter().map(|c| c.contribution).sum();
    let score = total
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .max(Decimal::ZERO)
        .min(HUNDRED)
        .to_u8()
        .unwrap_or(0);

    HealthScore {
        score,
        rating: HealthRating::from_score(score),
        components,
    }
}
