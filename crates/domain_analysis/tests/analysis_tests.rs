//! Tests for domain_analysis

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, Rate};
use domain_analysis::{
    AnalysisEngine, AnalysisWarning, DtiBand, EngineConfig, HealthRating, HealthWeights, SubScore,
};
use domain_budget::{ExpenseCategory, IncomeExpenseProfile, SavingsStatus};
use domain_debt::PayoffStrategy;
use domain_investment::InvestmentParameters;
use test_utils::{
    assert_has_warning, assert_health_score_valid, assert_money_approx_eq, assert_rejected_field,
    AnalysisRequestBuilder, DebtBuilder, DebtFixtures, InvestmentFixtures, ProfileFixtures,
};

fn engine() -> AnalysisEngine {
    AnalysisEngine::new(EngineConfig::default()).unwrap()
}

// ============================================================================
// End-to-end Scenario
// ============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn test_income_expenses_and_investment() {
        let request = AnalysisRequestBuilder::new()
            .investment(InvestmentFixtures::scenario())
            .build();
        let result = engine().analyze(&request).unwrap();

        assert_eq!(result.budget.surplus.amount(), dec!(2900));
        assert_eq!(result.savings.status, SavingsStatus::AboveTarget);
        assert_eq!(result.debt.dti, Decimal::ZERO);

        let projection = result.investment.as_ref().unwrap();
        assert_eq!(projection.len(), 120);

        let growth = (Decimal::ONE + dec!(0.07) / dec!(12)).powi(120);
        let expected = dec!(1000) * growth + dec!(200) * (growth - Decimal::ONE) / (dec!(0.07) / dec!(12));
        assert_money_approx_eq(
            &projection.final_point().unwrap().balance,
            &Money::usd(expected),
            dec!(1.00),
        );

        assert!(result.warnings.is_empty());
        assert_eq!(result.health.rating, HealthRating::Excellent);
        assert!(result.health.score >= 95);
        assert_health_score_valid(&result);
    }

    #[test]
    fn test_summary_mirrors_reports() {
        let request = AnalysisRequestBuilder::new()
            .profile(ProfileFixtures::sample())
            .debts(DebtFixtures::sample())
            .investment(InvestmentFixtures::scenario())
            .build();
        let result = engine().analyze(&request).unwrap();
        let summary = &result.summary;

        assert_eq!(summary.monthly_surplus, result.budget.surplus);
        assert_eq!(summary.total_expenses.amount(), dec!(3200));
        assert_eq!(summary.total_debt.amount(), dec!(30000));
        // (150 + 280) / 5000
        assert_eq!(summary.debt_to_income, dec!(0.086));
        assert_eq!(summary.dti_band, DtiBand::Healthy);
        assert_eq!(summary.health_score, result.health.score);
        assert!(summary.months_to_debt_free.is_some());

        let last = result.investment.as_ref().unwrap().final_point().unwrap();
        assert_eq!(summary.projected_portfolio, Some(last.balance));
        assert_eq!(summary.projected_contributions.unwrap().amount(), dec!(24000));
        assert_eq!(summary.projected_returns, Some(last.interest));
    }

    #[test]
    fn test_analysis_is_repeatable() {
        let request = AnalysisRequestBuilder::new()
            .debts(DebtFixtures::avalanche_pair())
            .investment(InvestmentFixtures::scenario())
            .build();
        let engine = engine();
        assert_eq!(engine.analyze(&request).unwrap(), engine.analyze(&request).unwrap());
    }
}

// ============================================================================
// Degenerate Input Tests
// ============================================================================

mod warning_tests {
    use super::*;

    #[test]
    fn test_zero_income_is_warned_not_rejected() {
        let request = AnalysisRequestBuilder::new()
            .profile(ProfileFixtures::zero_income())
            .debt(DebtFixtures::credit_card())
            .build();
        let result = engine().analyze(&request).unwrap();

        assert_has_warning(&result, &AnalysisWarning::ZeroIncome);
        assert_eq!(result.savings.rate, Decimal::ZERO);
        assert_eq!(result.debt.dti, Decimal::ZERO);

        let debt = result
            .health
            .component(|s| matches!(s, SubScore::DebtBurden(_)))
            .unwrap();
        assert_eq!(debt.sub_score.value(), Decimal::ZERO);
    }

    #[test]
    fn test_never_paid_off_debt_is_warned() {
        let underwater = DebtFixtures::underwater();
        let request = AnalysisRequestBuilder::new()
            .debt(underwater.clone())
            .extra_payment(dec!(0))
            .build();
        let result = engine().analyze(&request).unwrap();

        assert_has_warning(&result, &AnalysisWarning::DebtNeverPaidOff(underwater.id));
        assert!(result.summary.months_to_debt_free.is_none());
    }

    #[test]
    fn test_surplus_retires_debt_that_minimums_never_would() {
        let underwater = DebtFixtures::underwater();
        let request = AnalysisRequestBuilder::new().debt(underwater.clone()).build();
        let result = engine().analyze(&request).unwrap();

        // the minimum alone never pays it off, the 2900 surplus does
        assert_has_warning(&result, &AnalysisWarning::DebtNeverPaidOff(underwater.id));
        assert_eq!(result.summary.debt_extra_payment.amount(), dec!(2900));
        assert!(result.summary.months_to_debt_free.is_some());
    }

    #[test]
    fn test_deficit_is_warned() {
        let request = AnalysisRequestBuilder::new()
            .profile(ProfileFixtures::deficit())
            .build();
        let result = engine().analyze(&request).unwrap();

        assert_has_warning(&result, &AnalysisWarning::Deficit);
        assert_eq!(result.savings.status, SavingsStatus::BelowTarget);
    }

    #[test]
    fn test_warning_serializes_with_tag() {
        let id = DebtFixtures::underwater().id;
        let json = serde_json::to_value(AnalysisWarning::DebtNeverPaidOff(id)).unwrap();
        assert_eq!(json["kind"], "debt_never_paid_off");
        assert_eq!(json["debt_id"], serde_json::to_value(id).unwrap());
    }
}

// ============================================================================
// Strategy Tests
// ============================================================================

mod strategy_tests {
    use super::*;

    #[test]
    fn test_strategies_order_debts_differently() {
        let debts = DebtFixtures::avalanche_pair();
        let analyze = |strategy| {
            engine()
                .analyze(
                    &AnalysisRequestBuilder::new()
                        .debts(debts.clone())
                        .strategy(strategy)
                        .extra_payment(dec!(300))
                        .build(),
                )
                .unwrap()
        };

        let avalanche = analyze(PayoffStrategy::Avalanche);
        let snowball = analyze(PayoffStrategy::Snowball);

        assert_eq!(avalanche.debt.plan.priority, vec![debts[0].id, debts[1].id]);
        assert_eq!(snowball.debt.plan.priority, vec![debts[1].id, debts[0].id]);
        assert!(
            avalanche.debt.plan.total_interest.amount() <= snowball.debt.plan.total_interest.amount()
        );
    }

    #[test]
    fn test_surplus_drives_strategy_without_extra_payment() {
        let debts = DebtFixtures::avalanche_pair();
        let analyze = |strategy| {
            engine()
                .analyze(
                    &AnalysisRequestBuilder::new()
                        .profile(
                            IncomeExpenseProfile::new(Money::usd(dec!(5000)))
                                .with_category(ExpenseCategory::Housing, Money::usd(dec!(1500))),
                        )
                        .debts(debts.clone())
                        .strategy(strategy)
                        .build(),
                )
                .unwrap()
        };

        let avalanche = analyze(PayoffStrategy::Avalanche);
        let snowball = analyze(PayoffStrategy::Snowball);

        assert_eq!(avalanche.summary.debt_extra_payment.amount(), dec!(3500));
        assert_eq!(avalanche.debt.plan.first_paid_off().unwrap().name, "Card A");
        assert_eq!(snowball.debt.plan.first_paid_off().unwrap().name, "Loan B");
        assert_eq!(avalanche.debt.plan.payoff_month(debts[0].id), Some(2));
        assert_eq!(snowball.debt.plan.payoff_month(debts[1].id), Some(1));
    }

    #[test]
    fn test_declared_savings_are_not_spent_on_debt() {
        let request = AnalysisRequestBuilder::new()
            .profile(
                IncomeExpenseProfile::new(Money::usd(dec!(5000)))
                    .with_category(ExpenseCategory::Housing, Money::usd(dec!(1500)))
                    .with_savings(Money::usd(dec!(1000))),
            )
            .debts(DebtFixtures::avalanche_pair())
            .build();
        let result = engine().analyze(&request).unwrap();

        assert_eq!(result.summary.debt_extra_payment.amount(), dec!(2500));
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_foreign_currency_debt_rejected() {
        let mut debt = DebtFixtures::credit_card();
        debt.balance = Money::new(dec!(5000), Currency::EUR);
        let request = AnalysisRequestBuilder::new().debt(debt).build();

        assert_rejected_field(engine().analyze(&request), "debts[0].balance");
    }

    #[test]
    fn test_out_of_range_debt_rate_rejected() {
        let request = AnalysisRequestBuilder::new()
            .debt(DebtFixtures::credit_card())
            .debt(DebtBuilder::new().rate_percent(dec!(45)).build())
            .build();

        assert_rejected_field(engine().analyze(&request), "debts[1].annual_rate");
    }

    #[test]
    fn test_zero_year_horizon_rejected() {
        let request = AnalysisRequestBuilder::new()
            .investment(InvestmentParameters::new(
                Money::usd(dec!(1000)),
                Money::usd(dec!(100)),
                Rate::new(dec!(0.05)),
                0,
            ))
            .build();

        assert_rejected_field(engine().analyze(&request), "investment.years");
    }
}

// ============================================================================
// Health Score Tests
// ============================================================================

mod health_tests {
    use super::*;

    #[test]
    fn test_idle_investment_earns_no_investment_points() {
        let request = AnalysisRequestBuilder::new()
            .investment(InvestmentFixtures::idle())
            .build();
        let result = engine().analyze(&request).unwrap();

        let investment = result
            .health
            .component(|s| matches!(s, SubScore::InvestmentTrajectory(_)))
            .unwrap();
        assert_eq!(investment.sub_score.value(), Decimal::ZERO);
        // budget, debt and savings all maxed: 30 + 30 + 25
        assert_eq!(result.health.score, 85);
    }

    #[test]
    fn test_custom_weights_change_score() {
        let mut config = EngineConfig::default();
        config.health.weights = HealthWeights::new(0, 0, 0, 100).unwrap();
        let engine = AnalysisEngine::new(config).unwrap();

        let result = engine.analyze(&AnalysisRequestBuilder::new().build()).unwrap();
        assert_eq!(result.health.score, 0);
        assert_health_score_valid(&result);
    }

    #[test]
    fn test_high_dti_scores_no_debt_points() {
        // 2000 of minimums on 5000 income
        let request = AnalysisRequestBuilder::new()
            .debt(
                DebtBuilder::new()
                    .balance(dec!(40000))
                    .rate_percent(dec!(6))
                    .minimum_payment(dec!(2000))
                    .build(),
            )
            .build();
        let result = engine().analyze(&request).unwrap();

        assert_eq!(result.summary.dti_band, DtiBand::High);
        let debt = result
            .health
            .component(|s| matches!(s, SubScore::DebtBurden(_)))
            .unwrap();
        assert_eq!(debt.sub_score.value(), Decimal::ZERO);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use test_utils::{debts_strategy, investment_strategy, profile_strategy};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn score_always_within_bounds(
            profile in profile_strategy(),
            debts in debts_strategy(),
            investment in proptest::option::of(investment_strategy()),
        ) {
            let mut builder = AnalysisRequestBuilder::new().profile(profile).debts(debts);
            if let Some(params) = investment {
                builder = builder.investment(params);
            }
            let result = engine().analyze(&builder.build()).unwrap();

            prop_assert!(result.health.score <= 100);
            let weights: Decimal = result.health.components.iter().map(|c| c.weight).sum();
            prop_assert_eq!(weights, Decimal::ONE);
            prop_assert_eq!(
                HealthRating::from_score(result.health.score),
                result.health.rating
            );
        }
    }
}
