//! Engine configuration

use serde::{Deserialize, Serialize};

use core_kernel::ValidationError;
use domain_budget::SavingsPolicy;
use domain_debt::DebtPolicy;
use domain_investment::{InvestmentPolicy, RetirementPolicy};

use crate::health::HealthPolicy;

/// Every policy the engine applies, fixed when the engine is built
///
/// Missing sections deserialize to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub savings: SavingsPolicy,
    pub debt: DebtPolicy,
    pub investment: InvestmentPolicy,
    pub retirement: RetirementPolicy,
    pub health: HealthPolicy,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.savings.validate()?;
        self.debt.validate()?;
        self.investment.validate()?;
        self.retirement.validate()?;
        self.health.validate()
    }
}
