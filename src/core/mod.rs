//! Core data structures produced by the trend pipeline.

mod scenario;
mod series;

pub use scenario::{ProjectionScenario, ScenarioKind};
pub use series::{DeltaSeries, GrowthRates, PeriodSeries};
