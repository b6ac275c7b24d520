//! Geometric forward projection of period values.
//!
//! A single ratio `R` is applied per period: the projection starts at the
//! last observed value and each following point is `R` times the previous
//! one. `R` is either supplied directly or estimated once from the trailing
//! periods of the observed series.

use crate::core::{PeriodSeries, ProjectionScenario, ScenarioKind};
use crate::error::{Result, TrendError};

/// Default number of trailing periods used to estimate the ratio.
pub const DEFAULT_TRAILING_WINDOW: usize = 3;

/// Source of the per-period ratio for a projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatioSource {
    /// Estimate from the trailing periods of the observed series.
    Estimated,
    /// Use the given constant.
    Fixed(f64),
}

/// Round a ratio to two decimal places.
///
/// Rounds the exact binary value of `ratio`, with exact midpoints going to
/// the even hundredth: `0.125 -> 0.12`, `0.375 -> 0.38`. Values that only
/// look like midpoints in decimal (`2.675` is stored below it) round by
/// their stored value.
///
/// # Example
/// ```
/// use epicurve::models::round_ratio;
///
/// assert_eq!(round_ratio(1.125), 1.12);
/// assert_eq!(round_ratio(1.666), 1.67);
/// ```
pub fn round_ratio(ratio: f64) -> f64 {
    if !ratio.is_finite() {
        return ratio;
    }

    let scaled = ratio * 100.0;
    // Exact error of the multiplication: ratio * 100 == scaled + residual
    let residual = ratio.mul_add(100.0, -scaled);
    let floor = scaled.floor();
    // Multiple of ulp(scaled), so it outweighs the residual unless zero
    let above_half = (scaled - floor) - 0.5;

    let hundredths = if above_half > 0.0 || (above_half == 0.0 && residual > 0.0) {
        floor + 1.0
    } else if above_half < 0.0 || residual < 0.0 {
        floor
    } else if floor.rem_euclid(2.0) == 0.0 {
        floor
    } else {
        floor + 1.0
    };
    hundredths / 100.0
}

/// Estimate the per-period ratio from the last `trailing_window` values.
///
/// With `tail` the trailing values, `R = sum(tail[1..]) / sum(tail[..n-1])`,
/// rounded to two decimal places.
///
/// # Errors
/// - `InvalidParameter` if `trailing_window < 2`
/// - `InsufficientData` if fewer than `trailing_window` values are available
/// - `DegenerateRatio` if the denominator is zero or the ratio is not finite
///
/// # Example
/// ```
/// use epicurve::models::estimate_ratio;
///
/// let r = estimate_ratio(&[1.0, 4.0, 8.0, 12.0], 3).unwrap();
/// assert_eq!(r, 1.67);
/// ```
pub fn estimate_ratio(period_values: &[f64], trailing_window: usize) -> Result<f64> {
    if trailing_window < 2 {
        return Err(TrendError::InvalidParameter(format!(
            "trailing window must be at least 2, got {trailing_window}"
        )));
    }
    if period_values.len() < trailing_window {
        return Err(TrendError::InsufficientData {
            needed: trailing_window,
            got: period_values.len(),
        });
    }

    let tail = &period_values[period_values.len() - trailing_window..];
    let numerator: f64 = tail[1..].iter().sum();
    let denominator: f64 = tail[..trailing_window - 1].iter().sum();

    if denominator == 0.0 {
        return Err(TrendError::DegenerateRatio {
            numerator,
            denominator,
        });
    }

    let ratio = round_ratio(numerator / denominator);
    if !ratio.is_finite() {
        return Err(TrendError::DegenerateRatio {
            numerator,
            denominator,
        });
    }
    Ok(ratio)
}

/// Number of projection points covering `horizon_units` base units with
/// periods of `window` units, including the starting observation.
///
/// # Example
/// ```
/// use epicurve::models::horizon_points;
///
/// // 90 days in weekly periods
/// assert_eq!(horizon_points(90, 7).unwrap(), 14);
/// ```
pub fn horizon_points(horizon_units: usize, window: usize) -> Result<usize> {
    if window == 0 {
        return Err(TrendError::InvalidWindow { window });
    }
    Ok(horizon_units.div_ceil(window) + 1)
}

/// Apply `point[k] = ratio * point[k - 1]` from `start` until `horizon_points`
/// points exist. The start is always included.
fn recurrence(start: f64, ratio: f64, horizon_points: usize) -> Vec<f64> {
    let len = horizon_points.max(1);
    let mut points = Vec::with_capacity(len);
    points.push(start);
    while points.len() < len {
        let next = ratio * points[points.len() - 1];
        points.push(next);
    }
    points
}

/// Project `period_values` forward under the given ratio source.
///
/// # Example
/// ```
/// use epicurve::models::{project, RatioSource};
///
/// let scenario = project(&[10.0], RatioSource::Fixed(2.0), 3, 4).unwrap();
/// assert_eq!(scenario.points(), &[10.0, 20.0, 40.0, 80.0]);
/// ```
pub fn project(
    period_values: &[f64],
    ratio_source: RatioSource,
    trailing_window: usize,
    horizon_points: usize,
) -> Result<ProjectionScenario> {
    let start = *period_values.last().ok_or(TrendError::EmptyData)?;

    let (kind, ratio) = match ratio_source {
        RatioSource::Estimated => (
            ScenarioKind::Estimated,
            estimate_ratio(period_values, trailing_window)?,
        ),
        RatioSource::Fixed(ratio) => {
            if !ratio.is_finite() {
                return Err(TrendError::InvalidParameter(format!(
                    "ratio must be finite, got {ratio}"
                )));
            }
            (ScenarioKind::Fixed, ratio)
        }
    };

    let points = recurrence(start, ratio, horizon_points);
    log::debug!(
        "projected {} points from {} at R {}",
        points.len(),
        start,
        ratio
    );
    Ok(ProjectionScenario::new(kind, ratio, points))
}

/// Projector with a fixed trailing window and horizon.
#[derive(Debug, Clone)]
pub struct GeometricProjector {
    trailing_window: usize,
    horizon_points: usize,
}

/// Builder for GeometricProjector.
#[derive(Debug, Clone)]
pub struct GeometricProjectorBuilder {
    trailing_window: usize,
    horizon_points: usize,
}

impl Default for GeometricProjectorBuilder {
    fn default() -> Self {
        Self {
            trailing_window: DEFAULT_TRAILING_WINDOW,
            horizon_points: 1,
        }
    }
}

impl GeometricProjectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of trailing periods used for ratio estimation (min 2).
    pub fn trailing_window(mut self, trailing_window: usize) -> Self {
        self.trailing_window = trailing_window;
        self
    }

    /// Set the number of projection points directly.
    pub fn horizon_points(mut self, points: usize) -> Self {
        self.horizon_points = points;
        self
    }

    /// Derive the number of points from a horizon in base units.
    pub fn horizon_units(mut self, units: usize, window: usize) -> Result<Self> {
        self.horizon_points = horizon_points(units, window)?;
        Ok(self)
    }

    pub fn build(self) -> Result<GeometricProjector> {
        if self.trailing_window < 2 {
            return Err(TrendError::InvalidParameter(format!(
                "trailing window must be at least 2, got {}",
                self.trailing_window
            )));
        }
        Ok(GeometricProjector {
            trailing_window: self.trailing_window,
            horizon_points: self.horizon_points,
        })
    }
}

impl GeometricProjector {
    /// Create a builder.
    pub fn builder() -> GeometricProjectorBuilder {
        GeometricProjectorBuilder::new()
    }

    pub fn trailing_window(&self) -> usize {
        self.trailing_window
    }

    pub fn horizon_points(&self) -> usize {
        self.horizon_points
    }

    /// Project a period series under one ratio source.
    pub fn project(
        &self,
        series: &PeriodSeries,
        ratio_source: RatioSource,
    ) -> Result<ProjectionScenario> {
        project(
            series.values(),
            ratio_source,
            self.trailing_window,
            self.horizon_points,
        )
    }

    /// Estimated-ratio scenario.
    pub fn estimated(&self, series: &PeriodSeries) -> Result<ProjectionScenario> {
        self.project(series, RatioSource::Estimated)
    }

    /// One scenario per fixed ratio, all sharing the same start and horizon.
    pub fn fixed(&self, series: &PeriodSeries, ratios: &[f64]) -> Result<Vec<ProjectionScenario>> {
        ratios
            .iter()
            .map(|&ratio| self.project(series, RatioSource::Fixed(ratio)))
            .collect()
    }
}
