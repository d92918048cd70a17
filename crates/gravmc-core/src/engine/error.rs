use thiserror::Error;

use super::transform::TransformError;
use crate::core::fitting::FitError;
use crate::core::stats::StatsError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Transform failed: {source}")]
    Transform {
        #[from]
        source: TransformError,
    },

    #[error("Statistical summary failed: {source}")]
    Stats {
        #[from]
        source: StatsError,
    },

    #[error("Linear fit failed: {source}")]
    Fit {
        #[from]
        source: FitError,
    },

    #[error("Failed to build the normal distribution for '{name}': {source}")]
    Sampling {
        name: &'static str,
        source: rand_distr::NormalError,
    },

    #[error(
        "Calibration arrays have mismatched lengths: color={color}, synthetic={synthetic}, observed={observed}, errors={errors}"
    )]
    LengthMismatch {
        color: usize,
        synthetic: usize,
        observed: usize,
        errors: usize,
    },

    #[error("Zero-point iteration count must be at least 2, got {0}")]
    TooFewIterations(usize),

    #[error("Sigma clipping rejected all but {kept} of {total} points (threshold {threshold})")]
    AllPointsRejected {
        kept: usize,
        total: usize,
        threshold: f64,
    },

    #[error("Sigma-clipping threshold must be positive and finite, got {0}")]
    InvalidRejectionThreshold(f64),
}
