//! Features derived from period series.

pub mod growth;

pub use growth::{growth_rates, linear_rate, log_rate, CLAMPED_RATE};
