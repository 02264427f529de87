//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the relevant fields and take defaults for the rest.

use core_kernel::{DebtId, Money, Rate};
use domain_analysis::AnalysisRequest;
use domain_budget::IncomeExpenseProfile;
use domain_debt::{Debt, DebtType, PayoffStrategy};
use domain_investment::InvestmentParameters;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::ProfileFixtures;

/// Builder for debts, defaulting to a 5000 credit card at 18% with a 150 minimum
pub struct DebtBuilder {
    id: Option<DebtId>,
    name: String,
    debt_type: DebtType,
    balance: Decimal,
    annual_rate: Rate,
    minimum_payment: Decimal,
}

impl Default for DebtBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DebtBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            name: "Credit Card".to_string(),
            debt_type: DebtType::CreditCard,
            balance: dec!(5000),
            annual_rate: Rate::from_percentage(dec!(18)),
            minimum_payment: dec!(150),
        }
    }

    pub fn id(mut self, id: DebtId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn debt_type(mut self, debt_type: DebtType) -> Self {
        self.debt_type = debt_type;
        self
    }

    /// Balance in USD
    pub fn balance(mut self, balance: Decimal) -> Self {
        self.balance = balance;
        self
    }

    /// Annual rate as a percentage, e.g. `dec!(18)` for 18%
    pub fn rate_percent(mut self, percent: Decimal) -> Self {
        self.annual_rate = Rate::from_percentage(percent);
        self
    }

    /// Minimum payment in USD
    pub fn minimum_payment(mut self, payment: Decimal) -> Self {
        self.minimum_payment = payment;
        self
    }

    pub fn build(self) -> Debt {
        let debt = Debt::new(
            self.name,
            self.debt_type,
            Money::usd(self.balance),
            self.annual_rate,
            Money::usd(self.minimum_payment),
        );
        match self.id {
            Some(id) => debt.with_id(id),
            None => debt,
        }
    }
}

/// Builder for complete analysis requests, starting from the scenario profile
pub struct AnalysisRequestBuilder {
    profile: IncomeExpenseProfile,
    debts: Vec<Debt>,
    investment: Option<InvestmentParameters>,
    strategy: PayoffStrategy,
    extra_payment: Option<Money>,
}

impl Default for AnalysisRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisRequestBuilder {
    pub fn new() -> Self {
        Self {
            profile: ProfileFixtures::scenario(),
            debts: Vec::new(),
            investment: None,
            strategy: PayoffStrategy::Avalanche,
            extra_payment: None,
        }
    }

    pub fn profile(mut self, profile: IncomeExpenseProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn debt(mut self, debt: Debt) -> Self {
        self.debts.push(debt);
        self
    }

    pub fn debts(mut self, debts: Vec<Debt>) -> Self {
        self.debts = debts;
        self
    }

    pub fn investment(mut self, investment: InvestmentParameters) -> Self {
        self.investment = Some(investment);
        self
    }

    pub fn strategy(mut self, strategy: PayoffStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Extra monthly debt payment in USD
    pub fn extra_payment(mut self, amount: Decimal) -> Self {
        self.extra_payment = Some(Money::usd(amount));
        self
    }

    pub fn build(self) -> AnalysisRequest {
        let mut request = AnalysisRequest::new(self.profile)
            .with_debts(self.debts)
            .with_strategy(self.strategy);
        request.investment = self.investment;
        request.extra_payment = self.extra_payment;
        request
    }

    /// The request as the JSON body the HTTP adapter accepts
    pub fn build_json(self) -> serde_json::Value {
        let request = self.build();
        let debts: Vec<serde_json::Value> = request
            .debts
            .iter()
            .map(|d| {
                serde_json::json!({
                    "name": d.name,
                    "debt_type": d.debt_type,
                    "balance": d.balance.amount().to_string(),
                    "annual_rate": d.annual_rate.as_decimal().to_string(),
                    "minimum_payment": d.minimum_payment.amount().to_string(),
                })
            })
            .collect();
        let expenses: serde_json::Map<String, serde_json::Value> = request
            .profile
            .expenses
            .iter()
            .map(|(name, amount)| (name.clone(), amount.amount().to_string().into()))
            .collect();

        let mut body = serde_json::json!({
            "currency": request.profile.currency(),
            "income": request.profile.income.amount().to_string(),
            "expenses": expenses,
            "debts": debts,
            "strategy": request.strategy,
        });
        if let Some(savings) = request.profile.savings {
            body["savings"] = savings.amount().to_string().into();
        }
        if let Some(extra) = request.extra_payment {
            body["extra_payment"] = extra.amount().to_string().into();
        }
        if let Some(investment) = request.investment {
            body["investment"] = serde_json::json!({
                "principal": investment.principal.amount().to_string(),
                "monthly_contribution": investment.monthly_contribution.amount().to_string(),
                "annual_rate": investment.annual_rate.as_decimal().to_string(),
                "years": investment.years,
            });
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debt_builder_defaults() {
        let debt = DebtBuilder::new().build();
        assert_eq!(debt.balance.amount(), dec!(5000));
        assert_eq!(debt.annual_rate, Rate::new(dec!(0.18)));
        assert_eq!(debt.minimum_payment.amount(), dec!(150));
    }

    #[test]
    fn test_request_json_shape() {
        let body = AnalysisRequestBuilder::new()
            .debt(DebtBuilder::new().build())
            .extra_payment(dec!(100))
            .build_json();
        assert_eq!(body["income"], "5000");
        assert_eq!(body["currency"], "USD");
        assert_eq!(body["debts"].as_array().unwrap().len(), 1);
        assert_eq!(body["extra_payment"], "100");
    }
}
