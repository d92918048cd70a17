//! Weighted linear least squares.

use nalgebra::{Matrix2, Vector2};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FitError {
    #[error("A linear fit needs at least 2 points, got {0}")]
    TooFewPoints(usize),
    #[error("Input slices have mismatched lengths: x={x}, y={y}, w={w}")]
    MismatchedLengths { x: usize, y: usize, w: usize },
    #[error("Non-finite value in fit input at index {0}")]
    NonFiniteInput(usize),
    #[error("Degenerate design: the weighted x-values do not span a line")]
    Degenerate,
}

/// A straight line `y = slope · x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fits a line minimizing `Σ (wᵢ·(yᵢ − slope·xᵢ − intercept))²`.
///
/// Weights multiply the residuals, so for Gaussian uncertainties the weight
/// is `1/σᵢ`, not `1/σᵢ²` (the numpy `polyfit` convention the reference
/// pipeline uses).
pub fn weighted_linear_fit(x: &[f64], y: &[f64], w: &[f64]) -> Result<LinearFit, FitError> {
    if x.len() != y.len() || x.len() != w.len() {
        return Err(FitError::MismatchedLengths {
            x: x.len(),
            y: y.len(),
            w: w.len(),
        });
    }
    if x.len() < 2 {
        return Err(FitError::TooFewPoints(x.len()));
    }

    // Normal equations of the weighted design [wᵢ·xᵢ, wᵢ] against wᵢ·yᵢ.
    let mut ata: Matrix2<f64> = Matrix2::zeros();
    let mut atb: Vector2<f64> = Vector2::zeros();
    for (i, ((&xi, &yi), &wi)) in x.iter().zip(y).zip(w).enumerate() {
        if !xi.is_finite() || !yi.is_finite() || !wi.is_finite() {
            return Err(FitError::NonFiniteInput(i));
        }
        let w2 = wi * wi;
        ata[(0, 0)] += w2 * xi * xi;
        ata[(0, 1)] += w2 * xi;
        ata[(1, 0)] += w2 * xi;
        ata[(1, 1)] += w2;
        atb[0] += w2 * xi * yi;
        atb[1] += w2 * yi;
    }

    let solution = ata
        .lu()
        .solve(&atb)
        .filter(|s| s[0].is_finite() && s[1].is_finite())
        .ok_or(FitError::Degenerate)?;

    Ok(LinearFit {
        slope: solution[0],
        intercept: solution[1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn exact_line_is_recovered() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y: Vec<f64> = x.iter().map(|&xi| 0.2 * xi + 0.5).collect();
        let w = [1.0; 4];
        let fit = weighted_linear_fit(&x, &y, &w).unwrap();
        assert!(f64_approx_equal(fit.slope, 0.2));
        assert!(f64_approx_equal(fit.intercept, 0.5));
        assert!(f64_approx_equal(fit.evaluate(10.0), 2.5));
    }

    #[test]
    fn weights_pull_the_fit_toward_well_measured_points() {
        // Two clusters at x=0 and x=1; the heavy weight at y=0 wins at x=0.
        let x = [0.0, 0.0, 1.0];
        let y = [0.0, 1.0, 2.0];
        let w = [10.0, 0.1, 10.0];
        let fit = weighted_linear_fit(&x, &y, &w).unwrap();
        assert!(fit.intercept < 0.1);
        assert!((fit.slope - 2.0).abs() < 0.1);
    }

    #[test]
    fn fit_is_invariant_under_uniform_weight_scaling() {
        let x = [0.0, 1.0, 2.0, 4.0];
        let y = [0.3, 0.9, 2.2, 3.8];
        let a = weighted_linear_fit(&x, &y, &[1.0; 4]).unwrap();
        let b = weighted_linear_fit(&x, &y, &[7.0; 4]).unwrap();
        assert!(f64_approx_equal(a.slope, b.slope));
        assert!(f64_approx_equal(a.intercept, b.intercept));
    }

    #[test]
    fn too_few_points_is_an_error() {
        let result = weighted_linear_fit(&[1.0], &[1.0], &[1.0]);
        assert!(matches!(result, Err(FitError::TooFewPoints(1))));
    }

    #[test]
    fn mismatched_lengths_are_an_error() {
        let result = weighted_linear_fit(&[1.0, 2.0], &[1.0], &[1.0, 1.0]);
        assert!(matches!(result, Err(FitError::MismatchedLengths { .. })));
    }

    #[test]
    fn identical_x_values_are_degenerate() {
        let result = weighted_linear_fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0], &[1.0, 1.0, 1.0]);
        assert!(matches!(result, Err(FitError::Degenerate)));
    }

    #[test]
    fn non_finite_input_is_reported_with_its_index() {
        let result = weighted_linear_fit(&[1.0, f64::NAN], &[1.0, 2.0], &[1.0, 1.0]);
        assert!(matches!(result, Err(FitError::NonFiniteInput(1))));
    }
}
