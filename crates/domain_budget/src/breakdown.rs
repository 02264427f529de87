//! Budget breakdown: category ratios and discretionary surplus

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use core_kernel::Money;

use crate::as_display_percentage;
use crate::error::BudgetError;
use crate::profile::IncomeExpenseProfile;

/// One expense category's share of income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Money,
    /// Fraction of income (0 when income is zero)
    pub ratio: Decimal,
}

impl CategoryShare {
    /// Ratio as a percentage with one decimal place
    pub fn percentage(&self) -> Decimal {
        as_display_percentage(self.ratio)
    }
}

/// Expenses measured against income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub income: Money,
    pub total_expenses: Money,
    /// `income - total_expenses`; negative means a deficit
    pub surplus: Money,
    /// Categories in name order
    pub categories: Vec<CategoryShare>,
    /// Exact sum of the category ratios
    pub total_expense_ratio: Decimal,
    /// Surplus as a fraction of income (negative in a deficit)
    pub savings_potential: Decimal,
    /// Set when income is zero and no ratio could be computed
    pub zero_income: bool,
}

impl BudgetBreakdown {
    pub fn is_deficit(&self) -> bool {
        self.surplus.is_negative()
    }

    /// Ratio for a category by name
    pub fn ratio_for(&self, category: &str) -> Option<Decimal> {
        self.categories
            .iter()
            .find(|share| share.category == category)
            .map(|share| share.ratio)
    }
}

/// Computes per-category ratios, total expense ratio, and surplus
///
/// # Arguments
///
/// * `profile` - The income and expense profile to analyse
///
/// # Returns
///
/// The breakdown, or a validation error naming the first invalid field.
/// A zero income yields zero ratios and `zero_income = true`.
pub fn calculate_budget_breakdown(
    profile: &IncomeExpenseProfile,
) -> Result<BudgetBreakdown, BudgetError> {
    profile.validate()?;

    let income = profile.income;
    let total_expenses = profile.total_expenses()?;
    let surplus = income.checked_sub(&total_expenses)?;
    let zero_income = income.is_zero();

    let mut categories = Vec::with_capacity(profile.expenses.len());
    for (name, amount) in &profile.expenses {
        let ratio = if zero_income {
            Decimal::ZERO
        } else {
            amount.ratio_to(&income)?
        };
        categories.push(CategoryShare {
            category: name.clone(),
            amount: *amount,
            ratio,
        });
    }

    let total_expense_ratio: Decimal = categories.iter().map(|c| c.ratio).sum();
    let savings_potential = if zero_income {
        warn!("Income is zero; budget ratios reported as zero");
        Decimal::ZERO
    } else {
        surplus.ratio_to(&income)?
    };

    debug!(
        income = %income,
        total_expenses = %total_expenses,
        surplus = %surplus,
        "Calculated budget breakdown"
    );

    Ok(BudgetBreakdown {
        income,
        total_expenses,
        surplus,
        categories,
        total_expense_ratio,
        savings_potential,
        zero_income,
    })
}
