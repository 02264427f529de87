//! Full analysis DTOs

use std::collections::BTreeMap;

use core_kernel::{Currency, Money};
use domain_analysis::AnalysisRequest;
use domain_budget::IncomeExpenseProfile;
use domain_debt::PayoffStrategy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::debt::DebtRequest;
use super::investment::InvestmentRequest;
use super::planning::{GoalRequest, RetirementRequest};
use super::non_negative;

fn expense_amounts(expenses: &BTreeMap<String, Decimal>) -> Result<(), ValidationError> {
    if expenses.len() > 50 {
        let mut err = ValidationError::new("too_many");
        err.message = Some("at most 50 expense categories".into());
        return Err(err);
    }
    expenses.values().try_for_each(non_negative)
}

/// Body of `POST /api/v1/analysis`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalysisRequestBody {
    #[serde(default)]
    pub currency: Currency,
    #[validate(custom(function = "non_negative"))]
    pub income: Decimal,
    #[serde(default)]
    #[validate(custom(function = "expense_amounts"))]
    pub expenses: BTreeMap<String, Decimal>,
    /// Monthly savings; the surplus is assumed when absent
    #[validate(custom(function = "non_negative"))]
    pub savings: Option<Decimal>,
    #[serde(default)]
    #[validate(length(max = 50), nested)]
    pub debts: Vec<DebtRequest>,
    #[validate(nested)]
    pub investment: Option<InvestmentRequest>,
    #[serde(default)]
    pub strategy: PayoffStrategy,
    #[validate(custom(function = "non_negative"))]
    pub extra_payment: Option<Decimal>,
    #[serde(default)]
    #[validate(length(max = 5), nested)]
    pub goals: Vec<GoalRequest>,
    #[validate(nested)]
    pub retirement: Option<RetirementRequest>,
}

impl AnalysisRequestBody {
    pub fn to_request(&self) -> AnalysisRequest {
        let currency = self.currency;
        let mut profile = self.expenses.iter().fold(
            IncomeExpenseProfile::new(Money::new(self.income, currency)),
            |profile, (name, amount)| profile.with_expense(name.clone(), Money::new(*amount, currency)),
        );
        if let Some(savings) = self.savings {
            profile = profile.with_savings(Money::new(savings, currency));
        }

        let mut request = AnalysisRequest::new(profile)
            .with_debts(self.debts.iter().map(|d| d.to_debt(currency)).collect())
            .with_strategy(self.strategy);
        if let Some(investment) = &self.investment {
            request = request.with_investment(investment.to_parameters(currency));
        }
        if let Some(extra) = self.extra_payment {
            request = request.with_extra_payment(Money::new(extra, currency));
        }
        for goal in &self.goals {
            request = request.with_goal(goal.to_goal(currency));
        }
        if let Some(retirement) = &self.retirement {
            request = request.with_retirement(retirement.to_parameters(currency));
        }
        request
    }
}
