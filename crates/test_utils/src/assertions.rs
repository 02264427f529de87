//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_analysis::{AnalysisError, AnalysisResult, AnalysisWarning};
use rust_decimal::Decimal;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Arguments
///
/// * `actual` - The actual Money value
/// * `expected` - The expected Money value
/// * `tolerance` - The allowed difference in the amount
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(
        money.is_zero(),
        "Expected zero money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that the health score is a valid 0-100 value whose components
/// carry weights summing to one
pub fn assert_health_score_valid(result: &AnalysisResult) {
    let health = &result.health;
    assert!(health.score <= 100, "Score out of range: {}", health.score);

    let weights: Decimal = health.components.iter().map(|c| c.weight).sum();
    assert_eq!(weights, Decimal::ONE, "Weights sum to {}", weights);

    for component in &health.components {
        let value = component.sub_score.value();
        assert!(
            value >= Decimal::ZERO && value <= Decimal::from(100),
            "Sub-score out of range: {:?}",
            component.sub_score
        );
    }
}

/// Asserts that the result carries a warning
pub fn assert_has_warning(result: &AnalysisResult, warning: &AnalysisWarning) {
    assert!(
        result.has_warning(warning),
        "Expected warning {:?}, got {:?}",
        warning,
        result.warnings
    );
}

/// Asserts that an analysis was rejected on `field`
pub fn assert_rejected_field<T: std::fmt::Debug>(result: Result<T, AnalysisError>, field: &str) {
    match result {
        Err(err) => assert_eq!(err.field(), Some(field), "Rejected for {}", err),
        Ok(value) => panic!("Expected rejection of {}, got {:?}", field, value),
    }
}
