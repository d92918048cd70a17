//! Statistical summaries used by the Monte-Carlo routines.

use thiserror::Error;

/// Which one-sided subset of a Monte-Carlo sample an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Lower,
    Upper,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Lower => write!(f, "lower"),
            Side::Upper => write!(f, "upper"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    #[error("Insufficient samples on the {side} side of the central value: {count} (need at least 2)")]
    InsufficientSamples { side: Side, count: usize },
    #[error("Input slices have mismatched lengths: {left} vs {right}")]
    MismatchedLengths { left: usize, right: usize },
    #[error("Cannot summarize an empty sample")]
    EmptyInput,
    #[error("Sum of weights is zero or non-finite: {0}")]
    InvalidWeightSum(f64),
}

/// One-sided asymmetric errors of a sample around a fixed central value.
///
/// The sample is split at `center` (values exactly equal to it count on both
/// sides), each side is summarized as `sqrt(Σ(v − center)² / (count − 1))`
/// and the result is halved. The halving is a fixed convention inherited
/// from the reference method and is reproduced exactly.
///
/// A side with fewer than two members cannot populate the `count − 1`
/// divisor and is reported as [`StatsError::InsufficientSamples`].
pub fn asymmetric_errors(samples: &[f64], center: f64) -> Result<(f64, f64), StatsError> {
    let lower = one_sided_error(samples.iter().filter(|&&v| v <= center), center, Side::Lower)?;
    let upper = one_sided_error(samples.iter().filter(|&&v| v >= center), center, Side::Upper)?;
    Ok((lower, upper))
}

fn one_sided_error<'a>(
    subset: impl Iterator<Item = &'a f64>,
    center: f64,
    side: Side,
) -> Result<f64, StatsError> {
    let mut count = 0usize;
    let mut sum_sq = 0.0;
    for &v in subset {
        count += 1;
        sum_sq += (v - center).powi(2);
    }
    if count < 2 {
        return Err(StatsError::InsufficientSamples { side, count });
    }
    Ok((sum_sq / (count - 1) as f64).sqrt() / 2.0)
}

/// Weighted arithmetic mean, `Σwᵢyᵢ / Σwᵢ`.
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    if values.len() != weights.len() {
        return Err(StatsError::MismatchedLengths {
            left: values.len(),
            right: weights.len(),
        });
    }
    let weight_sum: f64 = weights.iter().sum();
    if !weight_sum.is_finite() || weight_sum == 0.0 {
        return Err(StatsError::InvalidWeightSum(weight_sum));
    }
    let weighted_sum: f64 = values.iter().zip(weights).map(|(v, w)| v * w).sum();
    Ok(weighted_sum / weight_sum)
}

/// Population standard deviation (divisor `n`).
pub fn std_dev(values: &[f64]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Ok(var.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn asymmetric_errors_of_symmetric_sample_are_equal() {
        let samples = [-2.0, -1.0, 0.0, 1.0, 2.0];
        let (lower, upper) = asymmetric_errors(&samples, 0.0).unwrap();
        // Each side holds {0, 1, 2} around 0: sqrt(5/2)/2.
        let expected = (5.0f64 / 2.0).sqrt() / 2.0;
        assert!(f64_approx_equal(lower, expected));
        assert!(f64_approx_equal(upper, expected));
    }

    #[test]
    fn asymmetric_errors_counts_exact_center_on_both_sides() {
        // 1.0 appears on both sides, so each side has two members.
        let samples = [0.0, 1.0, 2.0];
        let (lower, upper) = asymmetric_errors(&samples, 1.0).unwrap();
        let expected = 1.0f64.sqrt() / 2.0;
        assert!(f64_approx_equal(lower, expected));
        assert!(f64_approx_equal(upper, expected));
    }

    #[test]
    fn asymmetric_errors_of_degenerate_sample_are_zero() {
        let samples = [3.0; 100];
        let (lower, upper) = asymmetric_errors(&samples, 3.0).unwrap();
        assert_eq!(lower, 0.0);
        assert_eq!(upper, 0.0);
    }

    #[test]
    fn asymmetric_errors_fails_when_one_side_is_too_thin() {
        let samples = [1.0, 2.0, 3.0];
        let result = asymmetric_errors(&samples, 0.5);
        assert!(matches!(
            result,
            Err(StatsError::InsufficientSamples {
                side: Side::Lower,
                count: 0
            })
        ));
    }

    #[test]
    fn asymmetric_errors_fails_for_a_single_sample() {
        let result = asymmetric_errors(&[1.3], 1.0);
        assert!(matches!(
            result,
            Err(StatsError::InsufficientSamples { .. })
        ));
    }

    #[test]
    fn weighted_mean_matches_hand_computation() {
        let values = [1.0, 2.0, 4.0];
        let weights = [1.0, 1.0, 2.0];
        let mean = weighted_mean(&values, &weights).unwrap();
        assert!(f64_approx_equal(mean, 11.0 / 4.0));
    }

    #[test]
    fn weighted_mean_rejects_empty_and_mismatched_input() {
        assert!(matches!(weighted_mean(&[], &[]), Err(StatsError::EmptyInput)));
        assert!(matches!(
            weighted_mean(&[1.0, 2.0], &[1.0]),
            Err(StatsError::MismatchedLengths { left: 2, right: 1 })
        ));
    }

    #[test]
    fn weighted_mean_rejects_zero_weight_sum() {
        let result = weighted_mean(&[1.0, 2.0], &[1.0, -1.0]);
        assert!(matches!(result, Err(StatsError::InvalidWeightSum(_))));
    }

    #[test]
    fn std_dev_uses_population_divisor() {
        let values = [1.0, 2.0, 3.0, 4.0];
        // Population variance of {1,2,3,4} is 1.25.
        assert!(f64_approx_equal(std_dev(&values).unwrap(), 1.25f64.sqrt()));
    }

    #[test]
    fn std_dev_of_constant_sample_is_zero() {
        assert_eq!(std_dev(&[2.5; 10]).unwrap(), 0.0);
    }
}
