//! Debt DTOs

use core_kernel::{Currency, Money, Rate};
use domain_debt::{Debt, DebtType, PayoffStrategy};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{fraction, non_negative};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DebtRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub debt_type: DebtType,
    #[validate(custom(function = "non_negative"))]
    pub balance: Decimal,
    #[validate(custom(function = "fraction"))]
    pub annual_rate: Decimal,
    #[validate(custom(function = "non_negative"))]
    pub minimum_payment: Decimal,
}

impl DebtRequest {
    pub fn to_debt(&self, currency: Currency) -> Debt {
        Debt::new(
            self.name.clone(),
            self.debt_type,
            Money::new(self.balance, currency),
            Rate::new(self.annual_rate),
            Money::new(self.minimum_payment, currency),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PayoffPlanRequest {
    #[serde(default)]
    pub currency: Currency,
    #[validate(custom(function = "non_negative"))]
    pub monthly_income: Decimal,
    #[validate(length(min = 1, max = 50), nested)]
    pub debts: Vec<DebtRequest>,
    #[serde(default)]
    pub strategy: PayoffStrategy,
    #[validate(custom(function = "non_negative"))]
    pub extra_payment: Option<Decimal>,
}

impl PayoffPlanRequest {
    pub fn debts(&self) -> Vec<Debt> {
        self.debts.iter().map(|d| d.to_debt(self.currency)).collect()
    }

    pub fn income(&self) -> Money {
        Money::new(self.monthly_income, self.currency)
    }

    pub fn extra_payment(&self) -> Money {
        Money::new(self.extra_payment.unwrap_or_default(), self.currency)
    }
}
