//! Photometric zero-point estimation with Monte-Carlo uncertainties and
//! sigma clipping.
//!
//! The zero point of a band is the error-weighted mean of
//! `synthetic − observed`; the color slope is a weighted linear fit of the
//! same differences against a color index. Both uncertainties come from
//! re-fitting under per-point noise draws, and a single rejection pass
//! discards outliers beyond `s_reject` zero-point errors before the final
//! fit.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use tracing::{debug, instrument};

use super::error::EngineError;
use crate::core::fitting::weighted_linear_fit;
use crate::core::stats::{std_dev, weighted_mean};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZeroPointParams {
    /// Number of Monte-Carlo re-fits for the error estimate.
    pub iterations: usize,
    /// Rejection threshold in multiples of the zero-point error.
    pub s_reject: f64,
}

impl Default for ZeroPointParams {
    fn default() -> Self {
        Self {
            iterations: 1024,
            s_reject: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZeroPointFit {
    pub zero_point: f64,
    pub zero_point_error: f64,
    pub slope: f64,
    pub slope_error: f64,
    pub accepted: usize,
    pub rejected: usize,
}

struct PassResult {
    zero_point: f64,
    zero_point_error: f64,
    slope: f64,
    slope_error: f64,
}

fn mc_pass(
    color: &[f64],
    diff: &[f64],
    err: &[f64],
    iterations: usize,
    rng: &mut impl Rng,
) -> Result<PassResult, EngineError> {
    let weights: Vec<f64> = err.iter().map(|&e| 1.0 / e).collect();

    // Point estimates come from the unperturbed data; the Monte-Carlo loop
    // only measures their dispersion.
    let zero_point = weighted_mean(diff, &weights)?;
    let slope = weighted_linear_fit(color, diff, &weights)?.slope;

    let mut zero_points = Vec::with_capacity(iterations);
    let mut slopes = Vec::with_capacity(iterations);
    let mut perturbed = vec![0.0; diff.len()];
    for _ in 0..iterations {
        for ((p, &d), &e) in perturbed.iter_mut().zip(diff).zip(err) {
            let z: f64 = StandardNormal.sample(rng);
            *p = d - e * z;
        }
        zero_points.push(weighted_mean(&perturbed, &weights)?);
        slopes.push(weighted_linear_fit(color, &perturbed, &weights)?.slope);
    }

    Ok(PassResult {
        zero_point,
        zero_point_error: std_dev(&zero_points)?,
        slope,
        slope_error: std_dev(&slopes)?,
    })
}

/// Fits the zero point and color slope of one band.
///
/// `color` is the color index per calibrator, `synthetic` and `observed` the
/// magnitudes, `err` the observed errors (already floored by the caller).
/// After the first pass, points with `|syn − obs − zp| ≥ s_reject · e_zp`
/// are rejected and the fit is redone on the survivors.
#[instrument(level = "debug", skip_all, fields(points = synthetic.len()))]
pub fn fit_zero_point(
    color: &[f64],
    synthetic: &[f64],
    observed: &[f64],
    err: &[f64],
    params: &ZeroPointParams,
    rng: &mut impl Rng,
) -> Result<ZeroPointFit, EngineError> {
    let total = synthetic.len();
    if color.len() != total || observed.len() != total || err.len() != total {
        return Err(EngineError::LengthMismatch {
            color: color.len(),
            synthetic: total,
            observed: observed.len(),
            errors: err.len(),
        });
    }
    if params.iterations < 2 {
        return Err(EngineError::TooFewIterations(params.iterations));
    }
    if !params.s_reject.is_finite() || params.s_reject <= 0.0 {
        return Err(EngineError::InvalidRejectionThreshold(params.s_reject));
    }

    let diff: Vec<f64> = synthetic.iter().zip(observed).map(|(s, o)| s - o).collect();

    let first = mc_pass(color, &diff, err, params.iterations, rng)?;

    let threshold = params.s_reject * first.zero_point_error;
    let keep: Vec<usize> = (0..total)
        .filter(|&i| (diff[i] - first.zero_point).abs() < threshold)
        .collect();
    let kept = keep.len();
    if kept < 2 {
        return Err(EngineError::AllPointsRejected {
            kept,
            total,
            threshold,
        });
    }
    if kept < total {
        debug!(
            rejected = total - kept,
            threshold, "Sigma clipping rejected outlier calibrators"
        );
    }

    let color_kept: Vec<f64> = keep.iter().map(|&i| color[i]).collect();
    let diff_kept: Vec<f64> = keep.iter().map(|&i| diff[i]).collect();
    let err_kept: Vec<f64> = keep.iter().map(|&i| err[i]).collect();

    let second = mc_pass(&color_kept, &diff_kept, &err_kept, params.iterations, rng)?;

    Ok(ZeroPointFit {
        zero_point: second.zero_point,
        zero_point_error: second.zero_point_error,
        slope: second.slope,
        slope_error: second.slope_error,
        accepted: kept,
        rejected: total - kept,
    })
}
