//! The analysis engine

use tracing::{debug, instrument, warn};

use core_kernel::Money;
use domain_budget::{analyze_savings_rate, assess_goals, calculate_budget_breakdown};
use domain_debt::{compute_debt_metrics, Debt, DebtReport, PayoffStrategy};
use domain_investment::{
    plan_retirement, project_investment_growth, GrowthProjection, InvestmentParameters,
};

use crate::config::EngineConfig;
use crate::error::AnalysisError;
use crate::health::{score_financial_health, DtiBand, HealthInputs};
use crate::request::AnalysisRequest;
use crate::result::{AnalysisResult, AnalysisWarning, SummaryReport};

/// Runs complete analyses under one fixed configuration
///
/// The engine holds no mutable state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    config: EngineConfig,
}

impl AnalysisEngine {
    /// Creates an engine, rejecting an inconsistent configuration
    pub fn new(config: EngineConfig) -> Result<Self, AnalysisError> {
        config.validate().map_err(AnalysisError::Configuration)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyses a full financial picture
    ///
    /// The request is validated in full first; on failure nothing is
    /// computed and the first offending field is returned.
    #[instrument(
        skip(self, request),
        fields(
            debts = request.debts.len(),
            goals = request.goals.len(),
            investing = request.investment.is_some()
        )
    )]
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        request.validate(&self.config)?;

        let profile = &request.profile;
        let budget = calculate_budget_breakdown(profile)?;

        let saved = profile
            .savings
            .unwrap_or_else(|| budget.surplus.non_negative());
        let savings = analyze_savings_rate(&profile.income, &saved, &self.config.savings)?;

        let extra_payment = request.debt_extra_payment(&budget.surplus)?;
        let debt = compute_debt_metrics(
            &request.debts,
            &profile.income,
            request.strategy,
            &extra_payment,
            &self.config.debt,
        )?;

        let investment = request
            .investment
            .as_ref()
            .map(|params| project_investment_growth(params, &self.config.investment))
            .transpose()?;

        let goals = assess_goals(&request.goals, &budget.surplus)?;

        // Without a projection the portfolio at retirement is taken as zero
        let projected = investment
            .as_ref()
            .and_then(GrowthProjection::final_point)
            .map(|point| point.balance)
            .unwrap_or_else(|| Money::zero(profile.currency()));
        let retirement = request
            .retirement
            .as_ref()
            .map(|params| plan_retirement(params, &projected, &self.config.retirement))
            .transpose()?;

        let inputs = HealthInputs::from_reports(&budget, &savings, &debt, investment.as_ref());
        let health = score_financial_health(&inputs, &self.config.health);

        let mut warnings = Vec::new();
        if budget.zero_income {
            warnings.push(AnalysisWarning::ZeroIncome);
        }
        if budget.is_deficit() {
            warnings.push(AnalysisWarning::Deficit);
        }
        warnings.extend(
            debt.never_paid_off()
                .map(|detail| AnalysisWarning::DebtNeverPaidOff(detail.debt_id)),
        );
        if !warnings.is_empty() {
            warn!(count = warnings.len(), "Analysis completed with warnings");
        }

        let (projected_portfolio, projected_contributions, projected_returns) =
            match investment.as_ref().and_then(GrowthProjection::final_point) {
                Some(point) => (
                    Some(point.balance),
                    Some(point.contributions),
                    Some(point.interest),
                ),
                None => (None, None, None),
            };

        let summary = SummaryReport {
            monthly_surplus: budget.surplus,
            total_expenses: budget.total_expenses,
            savings_rate: savings.rate,
            debt_to_income: debt.dti,
            dti_band: DtiBand::classify(debt.dti, &self.config.health),
            total_debt: debt.total_balance,
            health_score: health.score,
            health_rating: health.rating,
            debt_extra_payment: extra_payment,
            months_to_debt_free: debt.plan.months_to_debt_free.filter(|_| debt.has_debt()),
            projected_portfolio,
            projected_contributions,
            projected_returns,
        };

        debug!(score = health.score, rating = ?health.rating, "Analysis complete");

        Ok(AnalysisResult {
            budget,
            savings,
            debt,
            investment,
            goals,
            retirement,
            health,
            summary,
            warnings,
        })
    }

    /// Debt metrics and payoff plan on their own
    pub fn debt_plan(
        &self,
        debts: &[Debt],
        income: &Money,
        strategy: PayoffStrategy,
        extra_payment: &Money,
    ) -> Result<DebtReport, AnalysisError> {
        Ok(compute_debt_metrics(
            debts,
            income,
            strategy,
            extra_payment,
            &self.config.debt,
        )?)
    }

    /// Investment projection on its own
    pub fn project(&self, params: &InvestmentParameters) -> Result<GrowthProjection, AnalysisError> {
        Ok(project_investment_growth(params, &self.config.investment)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Rate;
    use domain_budget::{GoalFeasibility, IncomeExpenseProfile, SavingsGoal};
    use domain_debt::DebtType;
    use domain_investment::RetirementParameters;
    use rust_decimal_macros::dec;

    fn engine() -> AnalysisEngine {
        AnalysisEngine::new(EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnalysisEngine>();
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = EngineConfig::default();
        config.debt.max_simulation_months = 0;
        let err = AnalysisEngine::new(config).unwrap_err();
        assert!(matches!(err, AnalysisError::Configuration(_)));
    }

    #[test]
    fn test_savings_default_to_surplus() {
        let profile = IncomeExpenseProfile::new(Money::usd(dec!(4000)))
            .with_expense("Housing", Money::usd(dec!(3000)));
        let result = engine().analyze(&AnalysisRequest::new(profile)).unwrap();
        assert_eq!(result.savings.savings.amount(), dec!(1000));
        assert_eq!(result.savings.rate, dec!(0.25));
    }

    #[test]
    fn test_deficit_saves_nothing_and_warns() {
        let profile = IncomeExpenseProfile::new(Money::usd(dec!(2000)))
            .with_expense("Housing", Money::usd(dec!(2500)));
        let result = engine().analyze(&AnalysisRequest::new(profile)).unwrap();
        assert!(result.savings.savings.is_zero());
        assert!(result.has_warning(&AnalysisWarning::Deficit));
    }

    #[test]
    fn test_huge_expense_is_rejected_not_computed() {
        let profile = IncomeExpenseProfile::new(Money::usd(dec!(0.01)))
            .with_expense("Housing", Money::usd(dec!(1000000000000000000000000000)));
        let err = engine().analyze(&AnalysisRequest::new(profile)).unwrap_err();
        assert_eq!(err.field(), Some("expenses.Housing"));
    }

    #[test]
    fn test_largest_accepted_amounts_analyse() {
        let profile = IncomeExpenseProfile::new(Money::usd(dec!(0.0001)))
            .with_expense("Housing", Money::usd(core_kernel::MAX_AMOUNT));
        let request = AnalysisRequest::new(profile).with_investment(InvestmentParameters::new(
            Money::usd(core_kernel::MAX_AMOUNT),
            Money::usd(core_kernel::MAX_AMOUNT),
            Rate::new(dec!(0.30)),
            100,
        ));
        let result = engine().analyze(&request).unwrap();
        assert!(result.budget.is_deficit());
        assert_eq!(result.investment.map(|p| p.len()), Some(1200));
    }

    fn retirement() -> RetirementParameters {
        RetirementParameters {
            current_age: 30,
            retirement_age: 65,
            desired_monthly_income: Money::usd(dec!(4000)),
            guaranteed_monthly_income: Money::usd(dec!(1500)),
            expected_return: Rate::from_percentage(dec!(5)),
            inflation: Rate::from_percentage(dec!(3)),
        }
    }

    #[test]
    fn test_goals_assessed_against_surplus() {
        let profile = IncomeExpenseProfile::new(Money::usd(dec!(5000)))
            .with_expense("Housing", Money::usd(dec!(4200)));
        let request = AnalysisRequest::new(profile)
            .with_goal(SavingsGoal::new(
                "Emergency Fund",
                Money::usd(dec!(12000)),
                Money::usd(dec!(2000)),
                10,
            ))
            .with_goal(SavingsGoal::new(
                "Car",
                Money::usd(dec!(6000)),
                Money::usd(dec!(0)),
                6,
            ));
        let result = engine().analyze(&request).unwrap();

        // 800 surplus against 1000 a month for each
        assert_eq!(result.goals.len(), 2);
        assert_eq!(result.goals[0].name, "Emergency Fund");
        assert_eq!(result.goals[0].feasibility, GoalFeasibility::AtRisk);
        assert_eq!(result.goals[1].monthly_needed.amount(), dec!(1000));
    }

    #[test]
    fn test_retirement_without_investment_starts_from_zero() {
        let profile = IncomeExpenseProfile::new(Money::usd(dec!(5000)));
        let request = AnalysisRequest::new(profile).with_retirement(retirement());
        let plan = engine().analyze(&request).unwrap().retirement.unwrap();
        assert!(plan.projected_portfolio.is_zero());
        assert_eq!(plan.nest_egg.amount(), dec!(1545000));
        assert_eq!(plan.shortfall, plan.nest_egg);
    }

    #[test]
    fn test_retirement_counts_projected_portfolio() {
        let profile = IncomeExpenseProfile::new(Money::usd(dec!(5000)));
        let request = AnalysisRequest::new(profile)
            .with_investment(InvestmentParameters::new(
                Money::usd(dec!(10000)),
                Money::usd(dec!(500)),
                Rate::from_percentage(dec!(7)),
                10,
            ))
            .with_retirement(retirement());
        let result = engine().analyze(&request).unwrap();
        let plan = result.retirement.unwrap();

        assert_eq!(Some(plan.projected_portfolio), result.summary.projected_portfolio);
        assert_eq!(
            plan.shortfall.amount(),
            dec!(1545000) - plan.projected_portfolio.amount()
        );
    }

    #[test]
    fn test_no_goals_or_retirement_by_default() {
        let profile = IncomeExpenseProfile::new(Money::usd(dec!(5000)));
        let result = engine().analyze(&AnalysisRequest::new(profile)).unwrap();
        assert!(result.goals.is_empty());
        assert!(result.retirement.is_none());
    }

    #[test]
    fn test_validation_happens_before_computation() {
        let profile = IncomeExpenseProfile::new(Money::usd(dec!(4000)));
        let bad = Debt::new(
            "",
            DebtType::Other,
            Money::usd(dec!(100)),
            Rate::from_percentage(dec!(5)),
            Money::usd(dec!(10)),
        );
        let err = engine()
            .analyze(&AnalysisRequest::new(profile).with_debt(bad))
            .unwrap_err();
        assert_eq!(err.field(), Some("debts[0].name"));
    }
}
