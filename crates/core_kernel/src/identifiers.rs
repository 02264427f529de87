//! Strongly-typed identifiers for domain entities
//!
//! Newtype wrappers around UUIDs keep identifiers from being mixed up with
//! each other or with plain strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const DEBT_PREFIX: &str = "DEBT";

/// Identifies one debt within an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DebtId(Uuid);

impl DebtId {
    /// Creates a new time-ordered identifier (v7)
    pub fn new_v7() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DebtId {
    fn default() -> Self {
        Self::new_v7()
    }
}

impl fmt::Display for DebtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", DEBT_PREFIX, self.0)
    }
}
