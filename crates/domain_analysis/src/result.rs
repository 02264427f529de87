//! Analysis output

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{DebtId, Money};
use domain_budget::{BudgetBreakdown, GoalAssessment, SavingsReport};
use domain_debt::DebtReport;
use domain_investment::{GrowthProjection, RetirementPlan};

use crate::health::{DtiBand, HealthRating, HealthScore};

/// Degenerate conditions found while analysing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "debt_id", rename_all = "snake_case")]
pub enum AnalysisWarning {
    /// Income is zero; every ratio is reported as zero
    ZeroIncome,
    /// This debt's minimum payment does not cover its interest
    DebtNeverPaidOff(DebtId),
    /// Expenses exceed income
    Deficit,
}

impl AnalysisWarning {
    pub fn message(&self) -> String {
        match self {
            AnalysisWarning::ZeroIncome => "Income is zero; ratios are reported as zero".to_string(),
            AnalysisWarning::DebtNeverPaidOff(id) => {
                format!("Minimum payment on {} does not cover its interest", id)
            }
            AnalysisWarning::Deficit => "Expenses exceed income".to_string(),
        }
    }
}

/// Headline figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub monthly_surplus: Money,
    pub total_expenses: Money,
    pub savings_rate: Decimal,
    pub debt_to_income: Decimal,
    pub dti_band: DtiBand,
    pub total_debt: Money,
    pub health_score: u8,
    pub health_rating: HealthRating,
    /// Paid monthly beyond the debt minimums
    pub debt_extra_payment: Money,
    /// Months until every debt is retired under the chosen strategy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months_to_debt_free: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_portfolio: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_contributions: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_returns: Option<Money>,
}

/// Immutable snapshot of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub budget: BudgetBreakdown,
    pub savings: SavingsReport,
    pub debt: DebtReport,
    pub investment: Option<GrowthProjection>,
    /// One assessment per requested goal, in request order
    pub goals: Vec<GoalAssessment>,
    pub retirement: Option<RetirementPlan>,
    pub health: HealthScore,
    pub summary: SummaryReport,
    pub warnings: Vec<AnalysisWarning>,
}

impl AnalysisResult {
    pub fn has_warning(&self, warning: &AnalysisWarning) -> bool {
        self.warnings.contains(warning)
    }
}
