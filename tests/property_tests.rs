//! Property-based tests for the trend pipeline stages.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated cumulative series.

use epicurve::features::growth_rates;
use epicurve::models::{estimate_ratio, project, round_ratio, RatioSource};
use epicurve::transform::{average_by_period, cumulative_sum, derive_deltas, padding_for};
use proptest::prelude::*;

/// Strategy for generating non-decreasing cumulative counters.
fn cumulative_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..500, min_len..max_len).prop_map(|increments| {
        increments
            .iter()
            .scan(0i64, |total, &inc| {
                *total += inc;
                Some(*total)
            })
            .collect()
    })
}

/// Strategy for generating arbitrary counters, including decreases.
fn noisy_counter_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..10_000, min_len..max_len)
}

// =============================================================================
// Property: Period count is ceil(len / window)
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn period_count_is_ceiling(
        values in prop::collection::vec(-1000.0..1000.0_f64, 0..200),
        window in 1usize..15
    ) {
        let periods = average_by_period(&values, window).unwrap();
        prop_assert_eq!(periods.len(), values.len().div_ceil(window));
        prop_assert_eq!((values.len() + periods.padding()) % window, 0);
        prop_assert!(periods.padding() < window);
    }

    #[test]
    fn padding_only_affects_first_period(
        values in prop::collection::vec(0.0..1000.0_f64, 1..100),
        extra in prop::collection::vec(0.0..1000.0_f64, 1..7),
        window in 2usize..8
    ) {
        // Periods over a window-aligned tail are unchanged by any prefix.
        let tail_len = values.len() - values.len() % window;
        prop_assume!(tail_len > 0);
        let tail = &values[values.len() - tail_len..];

        let mut longer = extra.clone();
        longer.extend_from_slice(tail);

        let base = average_by_period(tail, window).unwrap();
        let extended = average_by_period(&longer, window).unwrap();

        let skip = extended.len() - base.len();
        for (a, b) in base.values().iter().zip(&extended.values()[skip..]) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn first_period_reflects_padding(
        values in prop::collection::vec(1.0..100.0_f64, 1..50),
        window in 1usize..10
    ) {
        let periods = average_by_period(&values, window).unwrap();
        let pad = padding_for(values.len(), window);
        let real = window - pad;
        let expected = values[..real.min(values.len())].iter().sum::<f64>() / window as f64;
        prop_assert!((periods.values()[0] - expected).abs() < 1e-9);
    }
}

// =============================================================================
// Property: Deltas round-trip to the original counter
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn deltas_round_trip(raw in noisy_counter_strategy(1, 300)) {
        let deltas = derive_deltas(&raw).unwrap();
        prop_assert_eq!(deltas.len(), raw.len());
        prop_assert_eq!(cumulative_sum(&deltas), raw);
    }

    #[test]
    fn max_delta_is_largest_increment(raw in noisy_counter_strategy(1, 300)) {
        let deltas = derive_deltas(&raw).unwrap();
        let max = deltas.values().iter().copied().max().unwrap();
        prop_assert_eq!(deltas.max_delta(), max);
    }

    #[test]
    fn non_decreasing_counter_has_no_negative_deltas(raw in cumulative_strategy(1, 300)) {
        let deltas = derive_deltas(&raw).unwrap();
        prop_assert!(deltas.values().iter().all(|&d| d >= 0));
    }
}

// =============================================================================
// Property: Growth rates are finite and floored at zero references
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn growth_rates_are_finite(
        values in prop::collection::vec(prop_oneof![Just(0.0), 0.0..1e6_f64], 0..100)
    ) {
        let rates = growth_rates(&values);
        prop_assert_eq!(rates.len(), values.len());
        prop_assert!(rates.log().iter().all(|r| r.is_finite()));
        prop_assert!(rates.linear().iter().all(|r| r.is_finite()));
    }

    #[test]
    fn zero_reference_gives_zero_rates(
        values in prop::collection::vec(prop_oneof![Just(0.0), 1.0..1e6_f64], 2..100)
    ) {
        let rates = growth_rates(&values);
        for i in 1..values.len() {
            if values[i - 1] == 0.0 {
                prop_assert_eq!(rates.log()[i], 0.0);
                prop_assert_eq!(rates.linear()[i], 0.0);
            }
        }
    }
}

// =============================================================================
// Property: Projection follows the geometric recurrence
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn fixed_ratio_projection_is_geometric(
        values in prop::collection::vec(0.0..1000.0_f64, 1..30),
        horizon in 1usize..30
    ) {
        let scenario = project(&values, RatioSource::Fixed(0.6), 3, horizon).unwrap();
        let start = *values.last().unwrap();

        prop_assert_eq!(scenario.len(), horizon);
        for (k, point) in scenario.points().iter().enumerate() {
            let expected = start * 0.6f64.powi(k as i32);
            prop_assert!((point - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }
    }

    #[test]
    fn estimated_ratio_has_two_decimals(
        values in prop::collection::vec(1.0..1000.0_f64, 3..30)
    ) {
        let ratio = estimate_ratio(&values, 3).unwrap();
        prop_assert!(((ratio * 100.0).round() - ratio * 100.0).abs() < 1e-6);
    }

    #[test]
    fn rounded_ratio_is_nearest_hundredth(ratio in -50.0..50.0_f64) {
        let rounded = round_ratio(ratio);
        prop_assert!((rounded - ratio).abs() <= 0.005 + 1e-12);
    }

    #[test]
    fn eighths_round_half_to_even(k in 0i64..400) {
        // Odd multiples of 1/8 are the only exact two-place midpoints
        let eighths = 2 * k + 1;
        let ratio = eighths as f64 / 8.0;
        let scaled = eighths * 25; // ratio * 200, always odd
        let lower = (scaled - 1) / 2;
        let expected = if lower % 2 == 0 { lower } else { lower + 1 };
        prop_assert_eq!(round_ratio(ratio), expected as f64 / 100.0);
    }
}
