//! Pipeline configuration.

use crate::error::{Result, TrendError};
use crate::models::DEFAULT_TRAILING_WINDOW;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default period width in base units (one week of days).
pub const DEFAULT_WINDOW: usize = 7;

/// Default projection horizon in base units.
pub const DEFAULT_HORIZON_UNITS: usize = 90;

/// Default stress-test ratios projected alongside the estimated one.
pub const DEFAULT_FIXED_RATIOS: [f64; 2] = [0.6, 0.75];

/// Settings for one pipeline run.
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Period width in base units.
    pub window: usize,
    /// Trailing periods used to estimate the ratio (min 2).
    pub trailing_window: usize,
    /// Projection horizon in base units.
    pub horizon_units: usize,
    /// Ratios projected in addition to the estimated one.
    pub fixed_ratios: Vec<f64>,
    /// Date of base-unit offset 0, if calendar dates are wanted.
    pub epoch: Option<NaiveDate>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            trailing_window: DEFAULT_TRAILING_WINDOW,
            horizon_units: DEFAULT_HORIZON_UNITS,
            fixed_ratios: DEFAULT_FIXED_RATIOS.to_vec(),
            epoch: None,
        }
    }
}

impl PipelineConfig {
    /// Create a builder starting from the defaults.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::new()
    }

    /// Parse and validate a JSON config.
    ///
    /// # Example
    /// ```
    /// use epicurve::config::PipelineConfig;
    ///
    /// let config = PipelineConfig::from_json(r#"{ "window": 14 }"#).unwrap();
    /// assert_eq!(config.window, 14);
    /// assert_eq!(config.trailing_window, 3);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the settings describe a runnable pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(TrendError::InvalidWindow {
                window: self.window,
            });
        }
        if self.trailing_window < 2 {
            return Err(TrendError::InvalidParameter(format!(
                "trailing window must be at least 2, got {}",
                self.trailing_window
            )));
        }
        if let Some(ratio) = self.fixed_ratios.iter().find(|r| !r.is_finite()) {
            return Err(TrendError::InvalidParameter(format!(
                "fixed ratio must be finite, got {ratio}"
            )));
        }
        Ok(())
    }
}

/// Builder for PipelineConfig.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the period width.
    pub fn window(mut self, window: usize) -> Self {
        self.config.window = window;
        self
    }

    /// Set the number of trailing periods for ratio estimation.
    pub fn trailing_window(mut self, trailing_window: usize) -> Self {
        self.config.trailing_window = trailing_window;
        self
    }

    /// Set the projection horizon in base units.
    pub fn horizon_units(mut self, units: usize) -> Self {
        self.config.horizon_units = units;
        self
    }

    /// Replace the fixed ratios.
    pub fn fixed_ratios(mut self, ratios: Vec<f64>) -> Self {
        self.config.fixed_ratios = ratios;
        self
    }

    pub fn epoch(mut self, epoch: NaiveDate) -> Self {
        self.config.epoch = Some(epoch);
        self
    }

    pub fn build(self) -> Result<PipelineConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
