//! Analysis Domain
//!
//! Combines the budget, debt, and investment domains into a single
//! immutable [`AnalysisResult`] and scores overall financial health.
//!
//! # Architecture
//!
//! - **Pure**: [`AnalysisEngine`] holds only an immutable [`EngineConfig`];
//!   every call is a function of its request and that config.
//! - **All or nothing**: a request is validated in full before anything is
//!   computed, and the first offending field is reported.
//! - **Degenerate input**: a zero income produces zero ratios and a
//!   [`AnalysisWarning::ZeroIncome`] rather than an error.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::Money;
//! use domain_analysis::{AnalysisEngine, AnalysisRequest, EngineConfig};
//! use domain_budget::IncomeExpenseProfile;
//! use rust_decimal_macros::dec;
//!
//! let profile = IncomeExpenseProfile::new(Money::usd(dec!(5000)))
//!     .with_expense("Housing", Money::usd(dec!(1500)));
//! let engine = AnalysisEngine::new(EngineConfig::default()).unwrap();
//! let result = engine.analyze(&AnalysisRequest::new(profile)).unwrap();
//! assert!(result.health.score <= 100);
//! ```

pub mod config;
pub mod health;
pub mod request;
pub mod result;
pub mod engine;
pub mod error;

pub use config::EngineConfig;
pub use health::{
    score_financial_health, DtiBand, HealthInputs, HealthPolicy, HealthRating, HealthScore,
    HealthWeights, InvestmentSignal, SubScore, WeightedSubScore,
};
pub use request::AnalysisRequest;
pub use result::{AnalysisResult, AnalysisWarning, SummaryReport};
pub use engine::AnalysisEngine;
pub use error::AnalysisError;
