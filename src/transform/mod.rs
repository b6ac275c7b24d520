//! Series transformations feeding the growth and projection stages.
//!
//! # Example
//!
//! ```
//! use epicurve::transform::{average_by_period, derive_deltas};
//!
//! let cumulative = vec![1, 3, 6, 10, 15, 21, 28];
//! let deltas = derive_deltas(&cumulative).unwrap();
//!
//! // Weekly means of the daily increments
//! let weekly = average_by_period(&deltas.to_f64(), 7).unwrap();
//! assert_eq!(weekly.values(), &[4.0]);
//! ```

pub mod delta;
pub mod period;

pub use delta::{cumulative_sum, derive_deltas};
pub use period::{average_by_period, left_pad, padding_for};
