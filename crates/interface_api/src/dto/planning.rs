//! Savings goal and retirement DTOs

use core_kernel::{Currency, Money, Rate};
use domain_budget::SavingsGoal;
use domain_investment::RetirementParameters;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{fraction, non_negative};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GoalRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(custom(function = "non_negative"))]
    pub target: Decimal,
    #[serde(default)]
    #[validate(custom(function = "non_negative"))]
    pub current: Decimal,
    #[validate(range(min = 1, max = 1200))]
    pub months_left: u32,
}

impl GoalRequest {
    pub fn to_goal(&self, currency: Currency) -> SavingsGoal {
        SavingsGoal::new(
            self.name.clone(),
            Money::new(self.target, currency),
            Money::new(self.current, currency),
            self.months_left,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RetirementRequest {
    #[validate(range(max = 120))]
    pub current_age: u32,
    #[validate(range(max = 120))]
    pub retirement_age: u32,
    #[validate(custom(function = "non_negative"))]
    pub desired_monthly_income: Decimal,
    #[serde(default)]
    #[validate(custom(function = "non_negative"))]
    pub guaranteed_monthly_income: Decimal,
    #[validate(custom(function = "fraction"))]
    pub expected_return: Decimal,
    #[validate(custom(function = "fraction"))]
    pub inflation: Decimal,
}

impl RetirementRequest {
    pub fn to_parameters(&self, currency: Currency) -> RetirementParameters {
        RetirementParameters {
            current_age: self.current_age,
            retirement_age: self.retirement_age,
            desired_monthly_income: Money::new(self.desired_monthly_income, currency),
            guaranteed_monthly_income: Money::new(self.guaranteed_monthly_income, currency),
            expected_return: Rate::new(self.expected_return),
            inflation: Rate::new(self.inflation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_goal_current_defaults_to_zero() {
        let goal: GoalRequest = serde_json::from_value(serde_json::json!({
            "name": "Car",
            "target": "6000",
            "months_left": 12
        }))
        .unwrap();
        assert!(goal.validate().is_ok());
        assert!(goal.to_goal(Currency::EUR).current.is_zero());
    }

    #[test]
    fn test_retirement_rates_are_fractions() {
        let retirement: RetirementRequest = serde_json::from_value(serde_json::json!({
            "current_age": 30,
            "retirement_age": 65,
            "desired_monthly_income": "4000",
            "expected_return": "5",
            "inflation": "0.03"
        }))
        .unwrap();
        assert!(retirement.validate().is_err());
        assert_eq!(
            retirement.to_parameters(Currency::USD).inflation,
            Rate::new(dec!(0.03))
        );
    }
}
