//! Investment Domain
//!
//! Projects a portfolio forward month by month under a constant expected
//! return and a fixed monthly contribution.
//!
//! Each month:
//!
//! ```text
//! interest = round_half_up_cents(balance * annual_rate / 12)
//! balance  = balance + interest + contribution
//! ```
//!
//! Settling interest to cents every month keeps the series exact in decimal
//! arithmetic, so `balance == principal + contributions + interest` holds at
//! every point.
//!
//! The [`retirement`] module estimates the nest egg a desired retirement
//! income needs and how far a projected portfolio falls short of it.

pub mod parameters;
pub mod projection;
pub mod retirement;
pub mod error;

pub use parameters::{InvestmentParameters, InvestmentPolicy};
pub use projection::{GrowthPoint, GrowthProjection, project_investment_growth};
pub use retirement::{RetirementParameters, RetirementPlan, RetirementPolicy, plan_retirement, real_return};
pub use error::InvestmentError;

/// Months per projection year
pub const MONTHS_PER_YEAR: u32 = 12;
