use super::types::{RunningStatistics, ScoreDetails};
use crate::config::ScoringWeights;

/// Turns running statistics into diagnostics and a combined penalty.
///
/// Pure: the same inputs always give bit-identical output. With no values
/// the result is neutral. When every value was non-finite there is no average
/// to compare, so the deviation ratio is pinned at 1.0 rather than dividing by
/// zero. A zero midpoint is treated the same way.
pub fn score(
    stats: &RunningStatistics,
    half_range_midpoint: f64,
    weights: &ScoringWeights,
) -> ScoreDetails {
    if stats.count == 0 {
        return ScoreDetails::neutral();
    }

    let count = stats.count as f64;
    let finite_count = stats.finite_count();

    let zero_fraction = stats.zero_count as f64 / count;
    let nan_fraction = stats.nan_count as f64 / count;

    let (average_magnitude, deviation_ratio) = if finite_count == 0 || half_range_midpoint == 0.0 {
        (0.0, 1.0)
    } else {
        // negative_sum is <= 0, so this adds its magnitude
        let net_sum = stats.positive_sum - stats.negative_sum;
        let avg = net_sum / finite_count as f64;
        (
            avg,
            (avg - half_range_midpoint).abs() / half_range_midpoint,
        )
    };

    // Huge float sums can overflow to infinity; a zero weight must still
    // silence the term instead of yielding 0 * inf = NaN.
    let penalty = weighted(weights.weight_deviation, deviation_ratio)
        + weighted(weights.weight_zero, zero_fraction)
        + weighted(weights.weight_nan, nan_fraction);

    ScoreDetails {
        average_magnitude,
        deviation_ratio,
        zero_fraction,
        nan_fraction,
        penalty,
    }
}

fn weighted(weight: f64, value: f64) -> f64 {
    if weight == 0.0 {
        0.0
    } else {
        weight * value
    }
}
