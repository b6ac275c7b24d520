//! Fixed-width period averaging with left-padding.
//!
//! A source whose length is not a multiple of the window is padded with
//! zeros at the front, so the most recent period is always a full window.
//! Only the first emitted period is affected by padding.

use crate::core::PeriodSeries;
use crate::error::{Result, TrendError};

/// Number of leading zeros needed to make `len` a multiple of `window`.
///
/// Returns 0 for a zero window; callers validate the window separately.
pub fn padding_for(len: usize, window: usize) -> usize {
    if window == 0 {
        return 0;
    }
    (window - len % window) % window
}

/// Return a copy of `values` with `padding_for(len, window)` zeros prepended.
///
/// The input is left untouched.
pub fn left_pad(values: &[f64], window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(TrendError::InvalidWindow { window });
    }

    let padding = padding_for(values.len(), window);
    let mut padded = Vec::with_capacity(values.len() + padding);
    padded.resize(padding, 0.0);
    padded.extend_from_slice(values);
    Ok(padded)
}

/// Average `values` over consecutive, non-overlapping windows.
///
/// The output has `ceil(values.len() / window)` elements, oldest first.
///
/// # Example
/// ```
/// use epicurve::transform::average_by_period;
///
/// let periods = average_by_period(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], 7).unwrap();
/// assert_eq!(periods.padding(), 6);
/// assert!((periods.values()[0] - 1.0 / 7.0).abs() < 1e-12);
/// assert_eq!(periods.values()[1], 5.0);
/// ```
pub fn average_by_period(values: &[f64], window: usize) -> Result<PeriodSeries> {
    let padded = left_pad(values, window)?;
    let padding = padded.len() - values.len();

    let means: Vec<f64> = padded
        .chunks_exact(window)
        .map(|chunk| chunk.iter().sum::<f64>() / window as f64)
        .collect();

    log::debug!(
        "averaged {} values into {} periods of {} (padding {})",
        values.len(),
        means.len(),
        window,
        padding
    );
    Ok(PeriodSeries::new(means, window, padding))
}
