//! # epicurve
//!
//! Turns a cumulative daily counter (e.g. confirmed cases) into a smoothed
//! period series, per-period growth rates, and short-horizon geometric
//! projections under several growth-ratio scenarios.
//!
//! Stages, in order:
//! - [`transform::derive_deltas`]: cumulative totals to per-unit increments
//! - [`transform::average_by_period`]: left-padded fixed-window means
//! - [`features::growth_rates`]: log and linear percentage growth
//! - [`models::project`]: geometric recurrence under a fixed or estimated ratio
//!
//! [`pipeline::analyze`] runs them all.

pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod models;
pub mod pipeline;
pub mod transform;

pub use error::{Result, TrendError};

pub mod prelude {
    pub use crate::config::PipelineConfig;
    pub use crate::core::{DeltaSeries, GrowthRates, PeriodSeries, ProjectionScenario, ScenarioKind};
    pub use crate::error::{Result, TrendError};
    pub use crate::models::{GeometricProjector, RatioSource};
    pub use crate::pipeline::{analyze, TrendReport};
}
