//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that stays within the domain's validation rules.

use core_kernel::{Currency, Money, Rate};
use domain_budget::{ExpenseCategory, IncomeExpenseProfile};
use domain_debt::{Debt, DebtType};
use domain_investment::InvestmentParameters;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::JPY),
        Just(Currency::CHF),
        Just(Currency::INR),
        Just(Currency::AUD),
        Just(Currency::CAD),
    ]
}

/// Strategy for generating non-negative USD amounts up to 10 million
pub fn usd_money_strategy() -> impl Strategy<Value = Money> {
    (0i64..1_000_000_000i64).prop_map(|minor| Money::from_minor(minor, Currency::USD))
}

/// Strategy for expense categories
pub fn category_strategy() -> impl Strategy<Value = ExpenseCategory> {
    proptest::sample::select(ExpenseCategory::ALL.to_vec())
}

/// Strategy for valid profiles, including zero income and deficits
pub fn profile_strategy() -> impl Strategy<Value = IncomeExpenseProfile> {
    (
        prop_oneof![1 => Just(0i64), 9 => 0i64..2_000_000i64],
        proptest::collection::vec((category_strategy(), 0i64..500_000i64), 0..8),
    )
        .prop_map(|(income, expenses)| {
            expenses.into_iter().fold(
                IncomeExpenseProfile::new(Money::from_minor(income, Currency::USD)),
                |profile, (category, minor)| {
                    profile.with_category(category, Money::from_minor(minor, Currency::USD))
                },
            )
        })
}

/// Strategy for annual debt rates between 0.1% and 30%, in basis points
pub fn debt_rate_strategy() -> impl Strategy<Value = Rate> {
    (10i64..=3000i64).prop_map(|bps| Rate::new(Decimal::new(bps, 4)))
}

/// Strategy for valid debts, some of which never pay off at the minimum
pub fn debt_strategy() -> impl Strategy<Value = Debt> {
    (
        0i64..5_000_000i64,
        debt_rate_strategy(),
        0i64..200_000i64,
        prop_oneof![
            Just(DebtType::CreditCard),
            Just(DebtType::StudentLoan),
            Just(DebtType::Mortgage),
            Just(DebtType::Auto),
            Just(DebtType::Other),
        ],
    )
        .prop_map(|(balance, rate, payment, debt_type)| {
            Debt::new(
                debt_type.label(),
                debt_type,
                Money::from_minor(balance, Currency::USD),
                rate,
                Money::from_minor(payment, Currency::USD),
            )
        })
}

/// Strategy for up to five debts
pub fn debts_strategy() -> impl Strategy<Value = Vec<Debt>> {
    proptest::collection::vec(debt_strategy(), 0..5)
}

/// Strategy for valid investment parameters up to a 30-year horizon
pub fn investment_strategy() -> impl Strategy<Value = InvestmentParameters> {
    (
        0i64..10_000_000i64,
        0i64..500_000i64,
        0i64..=3000i64,
        1u32..=30u32,
    )
        .prop_map(|(principal, contribution, bps, years)| {
            InvestmentParameters::new(
                Money::from_minor(principal, Currency::USD),
                Money::from_minor(contribution, Currency::USD),
                Rate::new(Decimal::new(bps, 4)),
                years,
            )
        })
}
