//! Budget Domain
//!
//! Turns a monthly income and a set of expense categories into the ratios
//! and savings metrics the rest of the engine scores.
//!
//! # Key Concepts
//!
//! - **Profile**: monthly gross income, expenses per category, optional savings
//! - **Breakdown**: each category as a fraction of income, plus the surplus
//! - **Savings report**: savings rate measured against a fixed benchmark
//! - **Goals**: monthly amount a savings goal needs and whether the surplus covers it
//!
//! # Zero Income
//!
//! A zero income is not an error. Ratios are reported as zero and the result
//! carries a `zero_income` flag instead of dividing by zero.

pub mod profile;
pub mod breakdown;
pub mod savings;
pub mod goals;
pub mod error;

pub use profile::{IncomeExpenseProfile, ExpenseCategory};
pub use breakdown::{BudgetBreakdown, CategoryShare, calculate_budget_breakdown};
pub use savings::{SavingsPolicy, SavingsReport, SavingsStatus, SavingsTier, analyze_savings_rate};
pub use goals::{GoalAssessment, GoalFeasibility, SavingsGoal, assess_goal, assess_goals, validate_goals, MAX_GOALS};
pub use error::BudgetError;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Converts a fraction to a display percentage with one decimal place
///
/// # Example
///
/// ```rust
/// use domain_budget::as_display_percentage;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(as_display_percentage(dec!(0.12345)), dec!(12.3));
/// ```
pub fn as_display_percentage(fraction: Decimal) -> Decimal {
    (fraction * dec!(100)).round_dp(1)
}
