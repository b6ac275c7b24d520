//! Cumulative-to-increment conversion.

use crate::core::DeltaSeries;
use crate::error::{Result, TrendError};

/// Convert a cumulative counter into per-interval increments.
///
/// The first element is taken against an implicit predecessor of 0, so the
/// output has the same length as the input. Decreases are not rejected; they
/// produce negative increments. The largest increment is carried on the
/// returned series as [`DeltaSeries::max_delta`].
///
/// # Example
/// ```
/// use epicurve::transform::derive_deltas;
///
/// let deltas = derive_deltas(&[2, 5, 5, 9]).unwrap();
/// assert_eq!(deltas.values(), &[2, 3, 0, 4]);
/// assert_eq!(deltas.max_delta(), 4);
/// ```
pub fn derive_deltas(cumulative: &[i64]) -> Result<DeltaSeries> {
    let values: Vec<i64> = cumulative
        .iter()
        .scan(0i64, |previous, &total| {
            let delta = total - *previous;
            *previous = total;
            Some(delta)
        })
        .collect();

    let deltas = DeltaSeries::from_values(values).ok_or(TrendError::EmptyData)?;
    log::debug!(
        "derived {} deltas (max {})",
        deltas.len(),
        deltas.max_delta()
    );
    Ok(deltas)
}

/// Running total of a delta series; inverse of [`derive_deltas`].
pub fn cumulative_sum(deltas: &DeltaSeries) -> Vec<i64> {
    deltas
        .values()
        .iter()
        .scan(0i64, |total, &delta| {
            *total += delta;
            Some(*total)
        })
        .collect()
}
