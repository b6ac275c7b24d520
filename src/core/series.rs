//! Series produced by the pipeline stages.

use crate::error::{Result, TrendError};
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Per-interval increments derived from a cumulative counter.
///
/// Element `i` is `cumulative[i] - cumulative[i - 1]`, with an implicit
/// predecessor of 0 for the first element. A decreasing cumulative counter
/// yields negative increments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeltaSeries {
    values: Vec<i64>,
    max_delta: i64,
}

impl DeltaSeries {
    /// Build from already-derived increments. Returns `None` for empty input.
    pub(crate) fn from_values(values: Vec<i64>) -> Option<Self> {
        let max_delta = values.iter().copied().max()?;
        Some(Self { values, max_delta })
    }

    /// Get the increments.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Largest single-interval increment, used for axis scaling downstream.
    pub fn max_delta(&self) -> i64 {
        self.max_delta
    }

    /// Get the number of increments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a successfully derived series.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Increments widened to `f64`, ready for period averaging.
    pub fn to_f64(&self) -> Vec<f64> {
        self.values.iter().map(|&v| v as f64).collect()
    }
}

/// Mean value per fixed-width, non-overlapping window.
///
/// The source was left-padded with `padding` zeros so that every window,
/// including the last, is exactly `window` wide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSeries {
    values: Vec<f64>,
    window: usize,
    padding: usize,
}

impl PeriodSeries {
    pub(crate) fn new(values: Vec<f64>, window: usize, padding: usize) -> Self {
        Self {
            values,
            window,
            padding,
        }
    }

    /// Get the period means, oldest first.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Window width in base units.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Number of zeros prepended to the source before windowing.
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Get the number of periods.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no periods.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Most recent period mean.
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Base-unit offset of each period, measured at the end of its window
    /// from the start of the padded source: `window - 1 + k * window`.
    pub fn offsets(&self) -> Vec<usize> {
        (0..self.values.len())
            .map(|k| self.window - 1 + k * self.window)
            .collect()
    }

    /// Offset of the most recent period.
    pub fn last_offset(&self) -> Option<usize> {
        self.offsets().last().copied()
    }

    /// Calendar date of each period, treating offset 0 as `epoch`.
    ///
    /// Fails with `DateOutOfRange` if a period would land past the last
    /// representable date.
    pub fn dates(&self, epoch: NaiveDate) -> Result<Vec<NaiveDate>> {
        self.offsets()
            .into_iter()
            .map(|offset| {
                epoch
                    .checked_add_days(Days::new(offset as u64))
                    .ok_or(TrendError::DateOutOfRange { epoch, offset })
            })
            .collect()
    }
}

/// Log-scale and linear percentage growth between consecutive periods.
///
/// Both sequences are parallel to the period series they were computed
/// from; index 0 is always 0.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GrowthRates {
    log: Vec<f64>,
    linear: Vec<f64>,
}

impl GrowthRates {
    pub(crate) fn new(log: Vec<f64>, linear: Vec<f64>) -> Self {
        debug_assert_eq!(log.len(), linear.len());
        Self { log, linear }
    }

    /// `ln(cur / prev) * 100` per period.
    pub fn log(&self) -> &[f64] {
        &self.log
    }

    /// `(cur / prev - 1) * 100` per period.
    pub fn linear(&self) -> &[f64] {
        &self.linear
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Split into `(log, linear)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.log, self.linear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_series_tracks_max() {
        let deltas = DeltaSeries::from_values(vec![3, -2, 7, 1]).unwrap();
        assert_eq!(deltas.max_delta(), 7);
        assert_eq!(deltas.len(), 4);
        assert_eq!(deltas.to_f64(), vec![3.0, -2.0, 7.0, 1.0]);
    }

    #[test]
    fn delta_series_rejects_empty() {
        assert!(DeltaSeries::from_values(Vec::new()).is_none());
    }

    #[test]
    fn period_offsets_sit_at_window_end() {
        let series = PeriodSeries::new(vec![1.0, 2.0, 3.0], 7, 0);
        assert_eq!(series.offsets(), vec![6, 13, 20]);
        assert_eq!(series.last_offset(), Some(20));
    }

    #[test]
    fn period_offsets_empty() {
        let series = PeriodSeries::new(Vec::new(), 7, 0);
        assert!(series.offsets().is_empty());
        assert_eq!(series.last_offset(), None);
        assert_eq!(series.last(), None);
    }

    #[test]
    fn period_dates_follow_epoch() {
        let series = PeriodSeries::new(vec![1.0, 2.0], 7, 0);
        let epoch = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        let dates = series.dates(epoch).unwrap();
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2020, 3, 6).unwrap());
        assert_eq!(dates[1], NaiveDate::from_ymd_opt(2020, 3, 13).unwrap());
    }

    #[test]
    fn period_dates_past_calendar_end_fail() {
        let series = PeriodSeries::new(vec![1.0, 2.0], 7, 0);
        assert_eq!(
            series.dates(NaiveDate::MAX),
            Err(TrendError::DateOutOfRange {
                epoch: NaiveDate::MAX,
                offset: 6
            })
        );
    }

    #[test]
    fn growth_rates_split() {
        let rates = GrowthRates::new(vec![0.0, 1.0], vec![0.0, 2.0]);
        assert_eq!(rates.len(), 2);
        let (log, linear) = rates.into_parts();
        assert_eq!(log, vec![0.0, 1.0]);
        assert_eq!(linear, vec![0.0, 2.0]);
    }
}
