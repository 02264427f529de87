//! Request handlers

pub mod health;
pub mod analysis;
pub mod debt;
pub mod investment;
