//! Core data types for offering pricing

pub mod billing_cycle;
pub mod discount;
pub mod money;
