//! Period-over-period growth rates.
//!
//! Rates are percentages. Two guards keep every output finite:
//!
//! - `prev == 0`: both rates are 0 (no meaningful reference level).
//! - any other non-finite result, e.g. `ln(0 / prev)` when a period drops
//!   to zero, is replaced by [`CLAMPED_RATE`].
//!
//! The linear rate for `cur == 0` is a finite -100% and is kept as is.

use crate::core::GrowthRates;

/// Value substituted for a growth rate that would not be finite.
pub const CLAMPED_RATE: f64 = 0.0;

/// Log-scale growth from `prev` to `cur`: `ln(cur / prev) * 100`.
pub fn log_rate(prev: f64, cur: f64) -> f64 {
    if prev == 0.0 {
        return 0.0;
    }
    clamp_non_finite((cur / prev).ln() * 100.0, prev, cur)
}

/// Linear growth from `prev` to `cur`: `(cur / prev - 1) * 100`.
pub fn linear_rate(prev: f64, cur: f64) -> f64 {
    if prev == 0.0 {
        return 0.0;
    }
    clamp_non_finite((cur / prev - 1.0) * 100.0, prev, cur)
}

fn clamp_non_finite(rate: f64, prev: f64, cur: f64) -> f64 {
    if rate.is_finite() {
        rate
    } else {
        log::debug!("clamped non-finite growth rate ({prev} -> {cur}) to {CLAMPED_RATE}");
        CLAMPED_RATE
    }
}

/// Compute log and linear growth rates between consecutive period values.
///
/// Both outputs have the same length as `period_values`; the first element
/// of each is 0.
///
/// # Example
/// ```
/// use epicurve::features::growth_rates;
///
/// let rates = growth_rates(&[10.0, 20.0, 20.0]);
/// assert_eq!(rates.linear(), &[0.0, 100.0, 0.0]);
/// assert!((rates.log()[1] - 2.0f64.ln() * 100.0).abs() < 1e-12);
/// ```
pub fn growth_rates(period_values: &[f64]) -> GrowthRates {
    if period_values.is_empty() {
        return GrowthRates::default();
    }

    let mut log = Vec::with_capacity(period_values.len());
    let mut linear = Vec::with_capacity(period_values.len());
    log.push(0.0);
    linear.push(0.0);

    for pair in period_values.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        log.push(log_rate(prev, cur));
        linear.push(linear_rate(prev, cur));
    }

    GrowthRates::new(log, linear)
}
