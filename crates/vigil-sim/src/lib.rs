//! # vigil-sim
//!
//! Pure simulation transforms for the VIGIL patient monitor.
//!
//! This crate provides:
//! - The vital-sign fluctuation applied to the roster on every tick
//! - The synthetic 48-hour risk-history series behind the detail chart
//!
//! Both are pure functions of their inputs and an injected `rand::Rng`, so
//! callers own the randomness and tests can seed it.

pub mod fluctuate;
pub mod history;

pub use fluctuate::{fluctuate_roster, fluctuate_vitals};
pub use history::{risk_history, RiskPoint};
