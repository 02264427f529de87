//! Debt Domain
//!
//! Debt-to-income ratio, per-debt payoff timelines, and multi-debt payoff
//! plans.
//!
//! # Key Concepts
//!
//! - **Debt**: a balance accruing interest at an annual rate, serviced by a
//!   minimum monthly payment
//! - **DTI**: sum of minimum payments divided by monthly income
//! - **Payoff outcome**: months until a single debt reaches zero at its
//!   minimum payment, or `Never` when the payment does not cover interest
//! - **Payoff plan**: a month-by-month simulation of every debt under the
//!   avalanche (highest rate first) or snowball (smallest balance first)
//!   ordering
//!
//! Interest is charged monthly at `annual_rate / 12` and rounded half-up to
//! cents.

pub mod debt;
pub mod amortization;
pub mod strategy;
pub mod metrics;
pub mod error;

pub use debt::{Debt, DebtType};
pub use amortization::{PayoffOutcome, payoff_months};
pub use strategy::{PayoffStrategy, PayoffPlan, PayoffEntry, BalanceRow, DebtBalance, simulate_payoff};
pub use metrics::{DebtPolicy, DebtReport, DebtDetail, compute_debt_metrics, debt_to_income, validate_debts};
pub use error::DebtError;
