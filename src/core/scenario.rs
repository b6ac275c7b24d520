//! Projection scenario holding geometric forward projections.

use serde::Serialize;

/// Where a scenario's ratio came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScenarioKind {
    /// Ratio estimated from the trailing periods of the observed series.
    Estimated,
    /// Caller-supplied constant ratio.
    Fixed,
}

/// A forward projection under one per-period ratio.
///
/// Point 0 is the last observed period value; point `k` is
/// `ratio * point[k - 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionScenario {
    kind: ScenarioKind,
    ratio: f64,
    points: Vec<f64>,
}

impl ProjectionScenario {
    pub(crate) fn new(kind: ScenarioKind, ratio: f64, points: Vec<f64>) -> Self {
        Self {
            kind,
            ratio,
            points,
        }
    }

    pub fn kind(&self) -> ScenarioKind {
        self.kind
    }

    /// Per-period multiplicative ratio.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Display label, e.g. `R 0.75`.
    pub fn label(&self) -> String {
        format!("R {}", self.ratio)
    }

    /// Projected values, starting with the last observation.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Number of points, including the starting observation.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last projected value.
    pub fn final_value(&self) -> Option<f64> {
        self.points.last().copied()
    }

    /// Base-unit offsets at which each point should be plotted:
    /// `last_offset + k * window`.
    pub fn offsets(&self, last_offset: usize, window: usize) -> Vec<usize> {
        (0..self.points.len())
            .map(|k| last_offset + k * window)
            .collect()
    }
}
