//! End-to-end run from a cumulative counter to projection scenarios.

use crate::config::PipelineConfig;
use crate::core::{DeltaSeries, GrowthRates, PeriodSeries, ProjectionScenario, ScenarioKind};
use crate::error::{Result, TrendError};
use crate::features::growth_rates;
use crate::models::GeometricProjector;
use crate::transform::{average_by_period, derive_deltas};
use chrono::NaiveDate;
use serde::Serialize;

/// Everything the pipeline produces for one cumulative series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    /// Per-unit increments and their maximum.
    pub deltas: DeltaSeries,
    /// Period means of the cumulative counter (level).
    pub cumulative_periods: PeriodSeries,
    /// Period means of the increments (rate).
    pub delta_periods: PeriodSeries,
    /// Growth of the level series.
    pub growth: GrowthRates,
    /// Estimated scenario first when available, then one per fixed ratio.
    pub scenarios: Vec<ProjectionScenario>,
    /// Why the estimated scenario is missing, if it is.
    pub ratio_error: Option<TrendError>,
    /// Date of offset 0, when configured.
    pub epoch: Option<NaiveDate>,
}

impl TrendReport {
    /// Largest single-unit increment.
    pub fn max_delta(&self) -> i64 {
        self.deltas.max_delta()
    }

    /// Ratio of the estimated scenario, if it could be computed.
    pub fn estimated_ratio(&self) -> Option<f64> {
        self.estimated_scenario().map(|s| s.ratio())
    }

    /// The estimated-ratio scenario, if it could be computed.
    pub fn estimated_scenario(&self) -> Option<&ProjectionScenario> {
        self.scenarios
            .iter()
            .find(|s| s.kind() == ScenarioKind::Estimated)
    }

    /// Look up a scenario by where its ratio came from and its value.
    ///
    /// Labels are not unique: an estimated ratio of 0.6 and a fixed 0.6 are
    /// both `R 0.6`, so lookups go through the kind as well.
    pub fn scenario(&self, kind: ScenarioKind, ratio: f64) -> Option<&ProjectionScenario> {
        self.scenarios
            .iter()
            .find(|s| s.kind() == kind && s.ratio() == ratio)
    }

    /// The fixed-ratio scenario projected at `ratio`, if configured.
    pub fn fixed_scenario(&self, ratio: f64) -> Option<&ProjectionScenario> {
        self.scenario(ScenarioKind::Fixed, ratio)
    }

    /// Base-unit offsets of the projection points, continuing from the
    /// last observed period. Shared by all scenarios.
    pub fn projection_offsets(&self) -> Vec<usize> {
        let (Some(scenario), Some(last)) =
            (self.scenarios.first(), self.delta_periods.last_offset())
        else {
            return Vec::new();
        };
        scenario.offsets(last, self.delta_periods.window())
    }

    /// Calendar dates of the observed periods, if an epoch is configured.
    pub fn period_dates(&self) -> Result<Option<Vec<NaiveDate>>> {
        self.epoch
            .map(|epoch| self.delta_periods.dates(epoch))
            .transpose()
    }

    /// Serialize for the presentation layer.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Run every stage over a cumulative counter.
///
/// A failed ratio estimate does not fail the run: the error is kept on
/// [`TrendReport::ratio_error`] and only the fixed-ratio scenarios are
/// produced.
///
/// # Example
/// ```
/// use epicurve::config::PipelineConfig;
/// use epicurve::pipeline::analyze;
///
/// let cumulative: Vec<i64> = (1..=28).map(|d| d * d).collect();
/// let report = analyze(&cumulative, &PipelineConfig::default()).unwrap();
///
/// assert_eq!(report.delta_periods.len(), 4);
/// assert_eq!(report.scenarios.len(), 3);
/// assert!(report.fixed_scenario(0.6).is_some());
/// ```
pub fn analyze(cumulative: &[i64], config: &PipelineConfig) -> Result<TrendReport> {
    config.validate()?;

    let deltas = derive_deltas(cumulative)?;
    let levels: Vec<f64> = cumulative.iter().map(|&v| v as f64).collect();
    let cumulative_periods = average_by_period(&levels, config.window)?;
    let delta_periods = average_by_period(&deltas.to_f64(), config.window)?;
    let growth = growth_rates(cumulative_periods.values());

    let projector = GeometricProjector::builder()
        .trailing_window(config.trailing_window)
        .horizon_units(config.horizon_units, config.window)?
        .build()?;

    let mut scenarios = Vec::with_capacity(config.fixed_ratios.len() + 1);
    let ratio_error = match projector.estimated(&delta_periods) {
        Ok(scenario) => {
            scenarios.push(scenario);
            None
        }
        Err(err) => {
            log::warn!("estimated ratio unavailable: {err}");
            Some(err)
        }
    };
    scenarios.extend(projector.fixed(&delta_periods, &config.fixed_ratios)?);

    log::debug!(
        "analyzed {} units into {} periods, {} scenarios",
        cumulative.len(),
        delta_periods.len(),
        scenarios.len()
    );

    Ok(TrendReport {
        deltas,
        cumulative_periods,
        delta_periods,
        growth,
        scenarios,
        ratio_error,
        epoch: config.epoch,
    })
}
