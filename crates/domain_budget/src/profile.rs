//! Monthly income and expense profile

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use core_kernel::validation::{ensure_currency, ensure_amount, ensure_not_blank};
use core_kernel::{Currency, Money, ValidationError};

use crate::error::BudgetError;

/// Canonical expense categories
///
/// The expense map is open-ended; these are the names a caller is
/// encouraged to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Housing,
    Transportation,
    Food,
    Healthcare,
    Entertainment,
    Utilities,
    Insurance,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 7] = [
        ExpenseCategory::Housing,
        ExpenseCategory::Transportation,
        ExpenseCategory::Food,
        ExpenseCategory::Healthcare,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Utilities,
        ExpenseCategory::Insurance,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Healthcare => "Healthcare",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Insurance => "Insurance",
        }
    }

    /// Looks up a canonical category by name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A user's monthly income, expenses, and optional explicit savings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeExpenseProfile {
    /// Monthly gross income
    pub income: Money,
    /// Monthly amount per expense category, ordered by name
    pub expenses: BTreeMap<String, Money>,
    /// Monthly savings; when absent the non-negative surplus is used
    #[serde(default)]
    pub savings: Option<Money>,
}

impl IncomeExpenseProfile {
    /// Creates a profile with no expenses
    pub fn new(income: Money) -> Self {
        Self {
            income,
            expenses: BTreeMap::new(),
            savings: None,
        }
    }

    /// Adds (or replaces) an expense category
    pub fn with_expense(mut self, category: impl Into<String>, amount: Money) -> Self {
        self.expenses.insert(category.into(), amount);
        self
    }

    /// Adds (or replaces) a canonical expense category
    pub fn with_category(self, category: ExpenseCategory, amount: Money) -> Self {
        self.with_expense(category.name(), amount)
    }

    /// Sets explicit monthly savings
    pub fn with_savings(mut self, savings: Money) -> Self {
        self.savings = Some(savings);
        self
    }

    /// The currency every amount in the profile must use
    pub fn currency(&self) -> Currency {
        self.income.currency()
    }

    /// Sum of all expense categories
    pub fn total_expenses(&self) -> Result<Money, BudgetError> {
        Ok(Money::sum(self.expenses.values(), self.currency())?)
    }

    /// Checks that every amount is non-negative, named and in one currency
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_amount("income", &self.income)?;

        let currency = self.currency();
        for (name, amount) in &self.expenses {
            ensure_not_blank("expenses", name)?;
            let field = format!("expenses.{}", name);
            ensure_currency(&field, amount, currency)?;
            ensure_amount(&field, amount)?;
        }

        if let Some(savings) = &self.savings {
            ensure_currency("savings", savings, currency)?;
            ensure_amount("savings", savings)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_category_lookup_ignores_case() {
        assert_eq!(ExpenseCategory::from_name("housing"), Some(ExpenseCategory::Housing));
        assert_eq!(ExpenseCategory::from_name(" FOOD "), Some(ExpenseCategory::Food));
        assert_eq!(ExpenseCategory::from_name("Pets"), None);
    }

    #[test]
    fn test_with_expense_replaces_existing() {
        let profile = IncomeExpenseProfile::new(Money::usd(dec!(4000)))
            .with_expense("Rent", Money::usd(dec!(1000)))
            .with_expense("Rent", Money::usd(dec!(1200)));

        assert_eq!(profile.expenses.len(), 1);
        assert_eq!(profile.total_expenses().unwrap().amount(), dec!(1200));
    }

    #[test]
    fn test_validate_rejects_negative_expense() {
        let profile = IncomeExpenseProfile::new(Money::usd(dec!(4000)))
            .with_category(ExpenseCategory::Food, Money::usd(dec!(-5)));

        let err = profile.validate().unwrap_err();
        assert_eq!(err.field, "expenses.Food");
    }

    #[test]
    fn test_validate_rejects_foreign_currency_expense() {
        let profile = IncomeExpenseProfile::new(Money::usd(dec!(4000)))
            .with_expense("Rent", Money::new(dec!(900), Currency::EUR));

        assert_eq!(profile.validate().unwrap_err().field, "expenses.Rent");
    }
}
