//! Analysis input

use serde::{Deserialize, Serialize};

use core_kernel::validation::{ensure_currency, ensure_amount};
use core_kernel::{Money, MoneyError, ValidationError};
use domain_budget::{validate_goals, IncomeExpenseProfile, SavingsGoal};
use domain_debt::{validate_debts, Debt, PayoffStrategy};
use domain_investment::{InvestmentParameters, RetirementParameters};

use crate::config::EngineConfig;

/// Everything needed for one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub profile: IncomeExpenseProfile,
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub investment: Option<InvestmentParameters>,
    #[serde(default)]
    pub strategy: PayoffStrategy,
    /// Paid monthly on top of the debt minimums
    #[serde(default)]
    pub extra_payment: Option<Money>,
    #[serde(default)]
    pub goals: Vec<SavingsGoal>,
    #[serde(default)]
    pub retirement: Option<RetirementParameters>,
}

impl AnalysisRequest {
    pub fn new(profile: IncomeExpenseProfile) -> Self {
        Self {
            profile,
            debts: Vec::new(),
            investment: None,
            strategy: PayoffStrategy::default(),
            extra_payment: None,
            goals: Vec::new(),
            retirement: None,
        }
    }

    pub fn with_debts(mut self, debts: Vec<Debt>) -> Self {
        self.debts = debts;
        self
    }

    pub fn with_debt(mut self, debt: Debt) -> Self {
        self.debts.push(debt);
        self
    }

    pub fn with_investment(mut self, investment: InvestmentParameters) -> Self {
        self.investment = Some(investment);
        self
    }

    pub fn with_strategy(mut self, strategy: PayoffStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_extra_payment(mut self, extra_payment: Money) -> Self {
        self.extra_payment = Some(extra_payment);
        self
    }

    pub fn with_goal(mut self, goal: SavingsGoal) -> Self {
        self.goals.push(goal);
        self
    }

    pub fn with_retirement(mut self, retirement: RetirementParameters) -> Self {
        self.retirement = Some(retirement);
        self
    }

    /// Monthly amount paid on debts beyond their minimums
    ///
    /// An explicit `extra_payment` wins. Otherwise the part of `surplus` not
    /// already set aside as profile savings goes to the debts; a deficit
    /// leaves nothing.
    pub fn debt_extra_payment(&self, surplus: &Money) -> Result<Money, MoneyError> {
        if let Some(extra) = self.extra_payment {
            return Ok(extra);
        }
        let available = surplus.non_negative();
        match &self.profile.savings {
            Some(saved) => Ok(available.checked_sub(saved)?.non_negative()),
            None => Ok(available),
        }
    }

    /// Validates the whole request before anything is computed
    ///
    /// Every amount must be in the profile's currency. Returns the first
    /// offending field.
    pub fn validate(&self, config: &EngineConfig) -> Result<(), ValidationError> {
        let currency = self.profile.currency();
        self.profile.validate()?;
        validate_debts(&self.debts, currency, &config.debt)?;

        if let Some(extra) = &self.extra_payment {
            ensure_currency("extra_payment", extra, currency)?;
            ensure_amount("extra_payment", extra)?;
        }

        if let Some(investment) = &self.investment {
            ensure_currency("investment.principal", &investment.principal, currency)?;
            investment.validate(&config.investment)?;
        }

        validate_goals(&self.goals, currency)?;

        if let Some(retirement) = &self.retirement {
            ensure_currency(
                "retirement.desired_monthly_income",
                &retirement.desired_monthly_income,
                currency,
            )?;
            retirement.validate(&config.retirement)?;
        }
        Ok(())
    }
}
