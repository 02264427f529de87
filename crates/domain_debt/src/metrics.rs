//! Debt-to-income ratio and the aggregated debt report

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use core_kernel::validation::{ensure_currency, ensure_amount};
use core_kernel::{Currency, DebtId, Money, Rate, RateBounds, ValidationError};

use crate::amortization::{payoff_months, PayoffOutcome};
use crate::debt::{Debt, DebtType};
use crate::error::DebtError;
use crate::strategy::{simulate_payoff, PayoffPlan, PayoffStrategy};

/// Validation bounds and simulation limits for debts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebtPolicy {
    /// Accepted annual interest rates
    pub rate_bounds: RateBounds,
    /// Longest payoff simulation, in months
    pub max_simulation_months: u32,
}

impl Default for DebtPolicy {
    fn default() -> Self {
        Self {
            rate_bounds: RateBounds::debt_default(),
            max_simulation_months: 600,
        }
    }
}

impl DebtPolicy {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.rate_bounds.min > self.rate_bounds.max {
            return Err(ValidationError::new(
                "debt.rate_bounds",
                "minimum must not exceed maximum",
            ));
        }
        if self.rate_bounds.max > Rate::new(Decimal::ONE) {
            return Err(ValidationError::new(
                "debt.rate_bounds",
                "maximum must not exceed 100%",
            ));
        }
        if self.max_simulation_months == 0 {
            return Err(ValidationError::new(
                "debt.max_simulation_months",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Per-debt figures at the minimum payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtDetail {
    pub debt_id: DebtId,
    pub name: String,
    pub debt_type: DebtType,
    pub balance: Money,
    pub annual_rate: Rate,
    pub minimum_payment: Money,
    /// First month's interest, rounded to cents
    pub monthly_interest: Money,
    /// Payoff time paying only the minimum
    pub payoff: PayoffOutcome,
}

/// Aggregate debt burden and the payoff plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtReport {
    pub total_balance: Money,
    pub total_minimum_payment: Money,
    /// Sum of minimum payments over income; 0 when income is zero
    pub dti: Decimal,
    pub zero_income: bool,
    /// Debts in payment priority order
    pub details: Vec<DebtDetail>,
    pub plan: PayoffPlan,
}

impl DebtReport {
    pub fn has_debt(&self) -> bool {
        self.total_balance.is_positive()
    }

    /// Debts whose minimum payment never retires them
    pub fn never_paid_off(&self) -> impl Iterator<Item = &DebtDetail> {
        self.details.iter().filter(|d| d.payoff.is_never())
    }
}

/// Validates every debt against `currency` and the policy bounds
pub fn validate_debts(
    debts: &[Debt],
    currency: Currency,
    policy: &DebtPolicy,
) -> Result<(), ValidationError> {
    debts
        .iter()
        .enumerate()
        .try_for_each(|(index, debt)| debt.validate(index, currency, &policy.rate_bounds))
}

/// Sum of minimum payments divided by income
///
/// Returns `(dti, zero_income)`; a zero income yields `(0, true)`.
pub fn debt_to_income(total_minimum_payment: &Money, income: &Money) -> Result<(Decimal, bool), DebtError> {
    if income.is_zero() {
        return Ok((Decimal::ZERO, true));
    }
    Ok((total_minimum_payment.ratio_to(income)?, false))
}

/// Computes DTI, per-debt payoff timelines, and a payoff plan
///
/// # Arguments
///
/// * `debts` - Debts to analyse (may be empty)
/// * `income` - Monthly gross income
/// * `strategy` - Ordering for surplus payments
/// * `extra_payment` - Monthly amount paid on top of the minimums
/// * `policy` - Rate bounds and simulation horizon
pub fn compute_debt_metrics(
    debts: &[Debt],
    income: &Money,
    strategy: PayoffStrategy,
    extra_payment: &Money,
    policy: &DebtPolicy,
) -> Result<DebtReport, DebtError> {
    let currency = income.currency();
    ensure_amount("income", income)?;
    ensure_currency("extra_payment", extra_payment, currency)?;
    ensure_amount("extra_payment", extra_payment)?;
    validate_debts(debts, currency, policy)?;

    let total_balance = Money::sum(debts.iter().map(|d| &d.balance), currency)?;
    let total_minimum_payment = Money::sum(debts.iter().map(|d| &d.minimum_payment), currency)?;
    let (dti, zero_income) = debt_to_income(&total_minimum_payment, income)?;
    if zero_income && !debts.is_empty() {
        warn!("Income is zero; debt-to-income reported as zero");
    }

    let details: Vec<DebtDetail> = strategy
        .priority(debts)
        .into_iter()
        .map(|index| {
            let debt = &debts[index];
            let payoff = payoff_months(&debt.balance, debt.annual_rate, &debt.minimum_payment);
            if payoff.is_never() {
                warn!(
                    debt_id = %debt.id,
                    name = %debt.name,
                    "Minimum payment does not cover accruing interest"
                );
            }
            DebtDetail {
                debt_id: debt.id,
                name: debt.name.clone(),
                debt_type: debt.debt_type,
                balance: debt.balance,
                annual_rate: debt.annual_rate,
                minimum_payment: debt.minimum_payment,
                monthly_interest: Money::new(debt.monthly_interest(), currency).round_to_currency(),
                payoff,
            }
        })
        .collect();

    let plan = simulate_payoff(debts, strategy, extra_payment, policy.max_simulation_months)?;

    debug!(
        debts = debts.len(),
        total_balance = %total_balance,
        dti = %dti,
        "Computed debt metrics"
    );

    Ok(DebtReport {
        total_balance,
        total_minimum_payment,
        dti,
        zero_income,
        details,
        plan,
    })
}
