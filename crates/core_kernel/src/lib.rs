//! Core Kernel - Foundational types for the finance metrics engine
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with fixed-point decimal arithmetic and a single rounding policy
//! - Rates expressed as fractions
//! - Strongly-typed identifiers
//! - Field-level input validation shared by every domain crate

pub mod money;
pub mod identifiers;
pub mod validation;

pub use money::{Money, Currency, MoneyError, Rate, round_currency, CURRENCY_DP};
pub use identifiers::DebtId;
pub use validation::{ValidationError, RateBounds, AMOUNT_DP, MAX_AMOUNT};
