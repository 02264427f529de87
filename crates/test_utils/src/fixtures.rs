//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the budget, debt and investment
//! domains. These fixtures are consistent and predictable for unit tests.

use core_kernel::{Currency, Money, Rate};
use domain_budget::{ExpenseCategory, IncomeExpenseProfile};
use domain_debt::{Debt, DebtType};
use domain_investment::InvestmentParameters;
use rust_decimal_macros::dec;

use crate::builders::DebtBuilder;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard monthly income
    pub fn usd_income() -> Money {
        Money::usd(dec!(5000))
    }

    /// Creates a zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// Creates a EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }
}

/// Fixture for income and expense profiles
pub struct ProfileFixtures;

impl ProfileFixtures {
    /// 5000 income with every standard category filled (3200 in total)
    pub fn sample() -> IncomeExpenseProfile {
        IncomeExpenseProfile::new(MoneyFixtures::usd_income())
            .with_category(ExpenseCategory::Housing, Money::usd(dec!(1500)))
            .with_category(ExpenseCategory::Transportation, Money::usd(dec!(400)))
            .with_category(ExpenseCategory::Food, Money::usd(dec!(600)))
            .with_category(ExpenseCategory::Healthcare, Money::usd(dec!(200)))
            .with_category(ExpenseCategory::Entertainment, Money::usd(dec!(150)))
            .with_category(ExpenseCategory::Utilities, Money::usd(dec!(250)))
            .with_category(ExpenseCategory::Insurance, Money::usd(dec!(300)))
    }

    /// 5000 income, Housing 1500 and Food 600
    pub fn scenario() -> IncomeExpenseProfile {
        IncomeExpenseProfile::new(MoneyFixtures::usd_income())
            .with_category(ExpenseCategory::Housing, Money::usd(dec!(1500)))
            .with_category(ExpenseCategory::Food, Money::usd(dec!(600)))
    }

    /// Expenses with no income
    pub fn zero_income() -> IncomeExpenseProfile {
        IncomeExpenseProfile::new(MoneyFixtures::usd_zero())
            .with_category(ExpenseCategory::Housing, Money::usd(dec!(800)))
            .with_category(ExpenseCategory::Food, Money::usd(dec!(300)))
    }

    /// Expenses above income
    pub fn deficit() -> IncomeExpenseProfile {
        IncomeExpenseProfile::new(Money::usd(dec!(3000)))
            .with_category(ExpenseCategory::Housing, Money::usd(dec!(2200)))
            .with_category(ExpenseCategory::Food, Money::usd(dec!(900)))
    }
}

/// Fixture for debts
pub struct DebtFixtures;

impl DebtFixtures {
    /// 5000 at 18% with a 150 minimum
    pub fn credit_card() -> Debt {
        DebtBuilder::new().build()
    }

    /// 25000 at 5.5% with a 280 minimum
    pub fn student_loan() -> Debt {
        DebtBuilder::new()
            .name("Student Loan")
            .debt_type(DebtType::StudentLoan)
            .balance(dec!(25000))
            .rate_percent(dec!(5.5))
            .minimum_payment(dec!(280))
            .build()
    }

    pub fn sample() -> Vec<Debt> {
        vec![Self::credit_card(), Self::student_loan()]
    }

    /// A(5000, 22%, 150) and B(2000, 10%, 50): the two strategies order them differently
    pub fn avalanche_pair() -> Vec<Debt> {
        vec![
            DebtBuilder::new()
                .name("Card A")
                .balance(dec!(5000))
                .rate_percent(dec!(22))
                .minimum_payment(dec!(150))
                .build(),
            DebtBuilder::new()
                .name("Loan B")
                .debt_type(DebtType::Auto)
                .balance(dec!(2000))
                .rate_percent(dec!(10))
                .minimum_payment(dec!(50))
                .build(),
        ]
    }

    /// 10000 at 24%: 200 monthly interest against a 100 minimum
    pub fn underwater() -> Debt {
        DebtBuilder::new()
            .name("Store Card")
            .balance(dec!(10000))
            .rate_percent(dec!(24))
            .minimum_payment(dec!(100))
            .build()
    }
}

/// Fixture for investment parameters
pub struct InvestmentFixtures;

impl InvestmentFixtures {
    /// 1000 principal, 200 per month, 7% for 10 years
    pub fn scenario() -> InvestmentParameters {
        InvestmentParameters::new(
            Money::usd(dec!(1000)),
            Money::usd(dec!(200)),
            Rate::new(dec!(0.07)),
            10,
        )
    }

    /// Nothing invested and nothing contributed
    pub fn idle() -> InvestmentParameters {
        InvestmentParameters::new(
            MoneyFixtures::usd_zero(),
            MoneyFixtures::usd_zero(),
            Rate::new(dec!(0.05)),
            1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_profile_totals() {
        let total = ProfileFixtures::sample().total_expenses().unwrap();
        assert_eq!(total.amount(), dec!(3200));
    }

    #[test]
    fn test_underwater_fixture_is_underwater() {
        assert!(DebtFixtures::underwater().is_underwater());
        assert!(!DebtFixtures::credit_card().is_underwater());
    }
}
