//! Debt records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::validation::{ensure_currency, ensure_amount, ensure_not_blank, ensure_rate_within};
use core_kernel::{Currency, DebtId, Money, Rate, RateBounds, ValidationError};

/// Kind of debt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DebtType {
    #[default]
    CreditCard,
    StudentLoan,
    Mortgage,
    Auto,
    Other,
}

impl DebtType {
    pub fn label(&self) -> &'static str {
        match self {
            DebtType::CreditCard => "Credit Card",
            DebtType::StudentLoan => "Student Loan",
            DebtType::Mortgage => "Mortgage",
            DebtType::Auto => "Auto Loan",
            DebtType::Other => "Other",
        }
    }
}

/// An outstanding debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    /// Assigned on deserialization when absent
    #[serde(default = "DebtId::new_v7")]
    pub id: DebtId,
    pub name: String,
    #[serde(default)]
    pub debt_type: DebtType,
    /// Outstanding balance
    pub balance: Money,
    /// Annual interest rate as a fraction
    pub annual_rate: Rate,
    /// Minimum monthly payment
    pub minimum_payment: Money,
}

impl Debt {
    /// Creates a debt with a fresh identifier
    pub fn new(
        name: impl Into<String>,
        debt_type: DebtType,
        balance: Money,
        annual_rate: Rate,
        minimum_payment: Money,
    ) -> Self {
        Self {
            id: DebtId::new_v7(),
            name: name.into(),
            debt_type,
            balance,
            annual_rate,
            minimum_payment,
        }
    }

    /// Replaces the identifier
    pub fn with_id(mut self, id: DebtId) -> Self {
        self.id = id;
        self
    }

    /// Interest accrued over one month on the current balance (unrounded)
    pub fn monthly_interest(&self) -> Decimal {
        self.balance.amount() * self.annual_rate.monthly()
    }

    /// True when the minimum payment cannot outpace interest
    pub fn is_underwater(&self) -> bool {
        self.balance.is_positive() && self.minimum_payment.amount() <= self.monthly_interest()
    }

    /// Validates the record; `index` is its position in the caller's list
    pub fn validate(
        &self,
        index: usize,
        currency: Currency,
        rate_bounds: &RateBounds,
    ) -> Result<(), ValidationError> {
        let field = |name: &str| format!("debts[{}].{}", index, name);

        ensure_not_blank(&field("name"), &self.name)?;
        ensure_currency(&field("balance"), &self.balance, currency)?;
        ensure_amount(&field("balance"), &self.balance)?;
        ensure_rate_within(&field("annual_rate"), self.annual_rate, rate_bounds)?;
        ensure_currency(&field("minimum_payment"), &self.minimum_payment, currency)?;
        ensure_amount(&field("minimum_payment"), &self.minimum_payment)?;
        Ok(())
    }
}
