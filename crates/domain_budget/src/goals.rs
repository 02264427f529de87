//! Savings goals and whether the monthly surplus can fund them

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::validation::{ensure_amount, ensure_currency, ensure_not_blank};
use core_kernel::{Currency, Money, ValidationError};

use crate::error::BudgetError;

/// Most goals tracked at once
pub const MAX_GOALS: usize = 5;

/// Fraction of the required monthly amount the surplus must reach for a
/// goal to be "at risk" rather than "not feasible"
pub const AT_RISK_FRACTION: Decimal = dec!(0.5);

/// A target amount to save within a number of months
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub name: String,
    pub target: Money,
    /// Already saved toward the target
    pub current: Money,
    /// Whole months until the target date
    pub months_left: u32,
}

impl SavingsGoal {
    pub fn new(name: impl Into<String>, target: Money, current: Money, months_left: u32) -> Self {
        Self {
            name: name.into(),
            target,
            current,
            months_left,
        }
    }

    /// Checks the goal at position `index` against `currency`
    pub fn validate(&self, index: usize, currency: Currency) -> Result<(), ValidationError> {
        let field = |name: &str| format!("goals[{}].{}", index, name);

        ensure_not_blank(&field("name"), &self.name)?;
        ensure_currency(&field("target"), &self.target, currency)?;
        ensure_amount(&field("target"), &self.target)?;
        if self.target.is_zero() {
            return Err(ValidationError::new(field("target"), "must be greater than zero"));
        }
        ensure_currency(&field("current"), &self.current, currency)?;
        ensure_amount(&field("current"), &self.current)?;
        if self.months_left < 1 {
            return Err(ValidationError::new(field("months_left"), "must be at least 1"));
        }
        Ok(())
    }
}

/// Whether the surplus covers the monthly amount a goal needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalFeasibility {
    /// Nothing left to save
    Achieved,
    /// The surplus covers the monthly amount
    Achievable,
    /// The surplus covers at least half of it
    AtRisk,
    NotFeasible,
}

impl GoalFeasibility {
    fn classify(remaining: &Money, monthly_needed: &Money, surplus: &Money) -> Self {
        if !remaining.is_positive() {
            GoalFeasibility::Achieved
        } else if surplus.amount() >= monthly_needed.amount() {
            GoalFeasibility::Achievable
        } else if surplus.amount() >= monthly_needed.amount() * AT_RISK_FRACTION {
            GoalFeasibility::AtRisk
        } else {
            GoalFeasibility::NotFeasible
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalAssessment {
    pub name: String,
    /// Still to save, never negative
    pub remaining: Money,
    /// `remaining / months_left`, rounded half-up to cents
    pub monthly_needed: Money,
    pub feasibility: GoalFeasibility,
}

/// Assesses one goal against the monthly surplus
///
/// A negative surplus (a deficit) funds nothing.
pub fn assess_goal(goal: &SavingsGoal, surplus: &Money) -> Result<GoalAssessment, BudgetError> {
    goal.validate(0, surplus.currency())?;
    assess(goal, surplus)
}

/// Assesses up to [`MAX_GOALS`] goals, each against the full surplus
pub fn assess_goals(goals: &[SavingsGoal], surplus: &Money) -> Result<Vec<GoalAssessment>, BudgetError> {
    validate_goals(goals, surplus.currency())?;
    goals.iter().map(|goal| assess(goal, surplus)).collect()
}

fn assess(goal: &SavingsGoal, surplus: &Money) -> Result<GoalAssessment, BudgetError> {
    let currency = surplus.currency();
    let remaining = goal.target.checked_sub(&goal.current)?.non_negative();
    let monthly_needed = Money::new(
        remaining.amount() / Decimal::from(goal.months_left),
        currency,
    )
    .round_to_currency();
    let feasibility = GoalFeasibility::classify(&remaining, &monthly_needed, surplus);

    debug!(goal = %goal.name, monthly_needed = %monthly_needed, ?feasibility, "Assessed goal");

    Ok(GoalAssessment {
        name: goal.name.clone(),
        remaining,
        monthly_needed,
        feasibility,
    })
}

/// Validates every goal, naming the first offending field
pub fn validate_goals(goals: &[SavingsGoal], currency: Currency) -> Result<(), ValidationError> {
    if goals.len() > MAX_GOALS {
        return Err(ValidationError::new(
            "goals",
            format!("at most {} goals are tracked at once", MAX_GOALS),
        ));
    }
    goals
        .iter()
        .enumerate()
        .try_for_each(|(index, goal)| goal.validate(index, currency))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emergency_fund(current: Decimal) -> SavingsGoal {
        SavingsGoal::new(
            "Emergency Fund",
            Money::usd(dec!(12000)),
            Money::usd(current),
            10,
        )
    }

    fn feasibility(surplus: Decimal) -> GoalFeasibility {
        assess_goal(&emergency_fund(dec!(2000)), &Money::usd(surplus))
            .unwrap()
            .feasibility
    }

    #[test]
    fn test_monthly_needed() {
        let assessment = assess_goal(&emergency_fund(dec!(2000)), &Money::usd(dec!(1500))).unwrap();
        assert_eq!(assessment.remaining.amount(), dec!(10000));
        assert_eq!(assessment.monthly_needed.amount(), dec!(1000));
        assert_eq!(assessment.feasibility, GoalFeasibility::Achievable);
    }

    #[test]
    fn test_feasibility_bands() {
        assert_eq!(feasibility(dec!(1000)), GoalFeasibility::Achievable);
        assert_eq!(feasibility(dec!(999.99)), GoalFeasibility::AtRisk);
        assert_eq!(feasibility(dec!(500)), GoalFeasibility::AtRisk);
        assert_eq!(feasibility(dec!(499.99)), GoalFeasibility::NotFeasible);
        assert_eq!(feasibility(dec!(-200)), GoalFeasibility::NotFeasible);
    }

    #[test]
    fn test_goal_already_met() {
        let assessment = assess_goal(&emergency_fund(dec!(15000)), &Money::usd(dec!(0))).unwrap();
        assert_eq!(assessment.feasibility, GoalFeasibility::Achieved);
        assert!(assessment.remaining.is_zero());
        assert!(assessment.monthly_needed.is_zero());
    }

    #[test]
    fn test_monthly_needed_rounds_half_up() {
        let goal = SavingsGoal::new("Car", Money::usd(dec!(1000)), Money::usd(dec!(0)), 3);
        let assessment = assess_goal(&goal, &Money::usd(dec!(400))).unwrap();
        assert_eq!(assessment.monthly_needed.amount(), dec!(333.33));
    }

    #[test]
    fn test_zero_months_rejected() {
        let mut goal = emergency_fund(dec!(0));
        goal.months_left = 0;
        match assess_goal(&goal, &Money::usd(dec!(100))) {
            Err(BudgetError::Validation(err)) => assert_eq!(err.field, "goals[0].months_left"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_too_many_goals_rejected() {
        let goals = vec![emergency_fund(dec!(0)); MAX_GOALS + 1];
        let err = validate_goals(&goals, Currency::USD).unwrap_err();
        assert_eq!(err.field, "goals");
    }

    #[test]
    fn test_second_goal_named_in_error() {
        let mut bad = emergency_fund(dec!(0));
        bad.target = Money::usd(dec!(0));
        let err = validate_goals(&[emergency_fund(dec!(0)), bad], Currency::USD).unwrap_err();
        assert_eq!(err.field, "goals[1].target");
    }
}
