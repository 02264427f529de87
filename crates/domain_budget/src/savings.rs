//! Savings-rate analysis against a fixed benchmark

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::validation::{ensure_currency, ensure_fraction, ensure_amount};
use core_kernel::{round_currency, Money, ValidationError};

use crate::error::BudgetError;

/// Benchmark savings rate and classification thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsPolicy {
    /// Target fraction of income saved (the "20% rule")
    pub benchmark: Decimal,
    /// Distance from the benchmark still considered on target
    pub tolerance: Decimal,
    /// Below the benchmark but at or above this rate is "fair"
    pub fair_threshold: Decimal,
}

impl Default for SavingsPolicy {
    fn default() -> Self {
        Self {
            benchmark: dec!(0.20),
            tolerance: dec!(0.005),
            fair_threshold: dec!(0.10),
        }
    }
}

impl SavingsPolicy {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_fraction("savings.benchmark", self.benchmark)?;
        ensure_fraction("savings.tolerance", self.tolerance)?;
        ensure_fraction("savings.fair_threshold", self.fair_threshold)?;
        if self.fair_threshold > self.benchmark {
            return Err(ValidationError::new(
                "savings.fair_threshold",
                "must not exceed the benchmark",
            ));
        }
        Ok(())
    }
}

/// Position of the savings rate relative to the benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsStatus {
    BelowTarget,
    OnTarget,
    AboveTarget,
}

/// Coarse rating shown to users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsTier {
    Excellent,
    Fair,
    Low,
    NoIncome,
}

impl SavingsTier {
    pub fn description(&self) -> &'static str {
        match self {
            SavingsTier::Excellent => "Excellent - meets or exceeds the recommended savings rate",
            SavingsTier::Fair => "Fair - below the recommended savings benchmark",
            SavingsTier::Low => "Low - significantly below the recommended savings rate",
            SavingsTier::NoIncome => "No income reported",
        }
    }
}

/// Savings rate, status, and the amount still needed to hit the benchmark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsReport {
    pub savings: Money,
    /// `savings / income`, or 0 when income is zero
    pub rate: Decimal,
    pub status: SavingsStatus,
    pub tier: SavingsTier,
    /// Benchmark rate applied to income, rounded to cents
    pub benchmark_amount: Money,
    /// Additional monthly savings needed to reach the benchmark (never negative)
    pub gap: Money,
    pub zero_income: bool,
}

/// Measures a savings amount against the benchmark
///
/// # Arguments
///
/// * `income` - Monthly gross income
/// * `savings` - Monthly amount saved
/// * `policy` - Benchmark and thresholds
///
/// # Returns
///
/// A report; a zero income yields rate 0, `BelowTarget`, and a zero gap.
pub fn analyze_savings_rate(
    income: &Money,
    savings: &Money,
    policy: &SavingsPolicy,
) -> Result<SavingsReport, BudgetError> {
    ensure_amount("income", income)?;
    ensure_currency("savings", savings, income.currency())?;
    ensure_amount("savings", savings)?;

    if income.is_zero() {
        return Ok(SavingsReport {
            savings: *savings,
            rate: Decimal::ZERO,
            status: SavingsStatus::BelowTarget,
            tier: SavingsTier::NoIncome,
            benchmark_amount: Money::zero(income.currency()),
            gap: Money::zero(income.currency()),
            zero_income: true,
        });
    }

    let rate = savings.ratio_to(income)?;
    let status = if (rate - policy.benchmark).abs() <= policy.tolerance {
        SavingsStatus::OnTarget
    } else if rate > policy.benchmark {
        SavingsStatus::AboveTarget
    } else {
        SavingsStatus::BelowTarget
    };

    // OnTarget allows a tolerance; Excellent does not
    let tier = if rate >= policy.benchmark {
        SavingsTier::Excellent
    } else if rate >= policy.fair_threshold {
        SavingsTier::Fair
    } else {
        SavingsTier::Low
    };

    let benchmark_amount = Money::new(
        round_currency(income.amount() * policy.benchmark),
        income.currency(),
    );
    let gap = benchmark_amount.checked_sub(savings)?.non_negative();

    debug!(rate = %rate, ?status, gap = %gap, "Analyzed savings rate");

    Ok(SavingsReport {
        savings: *savings,
        rate,
        status,
        tier,
        benchmark_amount,
        gap,
        zero_income: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(income: Decimal, savings: Decimal) -> SavingsReport {
        analyze_savings_rate(
            &Money::usd(income),
            &Money::usd(savings),
            &SavingsPolicy::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_excellent_rate() {
        let report = analyze(dec!(5000), dec!(1500));
        assert_eq!(report.rate, dec!(0.3));
        assert_eq!(report.status, SavingsStatus::AboveTarget);
        assert_eq!(report.tier, SavingsTier::Excellent);
        assert!(report.gap.is_zero());
    }

    #[test]
    fn test_fair_rate() {
        let report = analyze(dec!(5000), dec!(600));
        assert_eq!(report.rate, dec!(0.12));
        assert_eq!(report.status, SavingsStatus::BelowTarget);
        assert_eq!(report.tier, SavingsTier::Fair);
        assert_eq!(report.gap.amount(), dec!(400));
    }

    #[test]
    fn test_low_rate() {
        let report = analyze(dec!(5000), dec!(200));
        assert_eq!(report.rate, dec!(0.04));
        assert_eq!(report.tier, SavingsTier::Low);
    }

    #[test]
    fn test_exact_benchmark_is_on_target() {
        let report = analyze(dec!(5000), dec!(1000));
        assert_eq!(report.status, SavingsStatus::OnTarget);
        assert!(report.gap.is_zero());
    }

    #[test]
    fn test_just_under_benchmark_is_on_target_but_fair() {
        let report = analyze(dec!(5000), dec!(980));
        assert_eq!(report.rate, dec!(0.196));
        assert_eq!(report.status, SavingsStatus::OnTarget);
        assert_eq!(report.tier, SavingsTier::Fair);
        assert_eq!(report.gap.amount(), dec!(20));
    }

    #[test]
    fn test_zero_income_never_divides() {
        let report = analyze(dec!(0), dec!(0));
        assert_eq!(report.rate, Decimal::ZERO);
        assert_eq!(report.status, SavingsStatus::BelowTarget);
        assert_eq!(report.tier, SavingsTier::NoIncome);
        assert!(report.gap.is_zero());
        assert!(report.zero_income);
    }

    #[test]
    fn test_negative_savings_rejected() {
        let result = analyze_savings_rate(
            &Money::usd(dec!(5000)),
            &Money::usd(dec!(-500)),
            &SavingsPolicy::default(),
        );
        match result {
            Err(BudgetError::Validation(err)) => assert_eq!(err.field, "savings"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_policy_rejects_fair_threshold_above_benchmark() {
        let policy = SavingsPolicy {
            fair_threshold: dec!(0.3),
            ..SavingsPolicy::default()
        };
        assert!(policy.validate().is_err());
    }
}
