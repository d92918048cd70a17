use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeasurementError {
    #[error("Measurement value must be finite, got {0}")]
    NonFiniteValue(f64),
    #[error("Measurement uncertainty must be finite and non-negative, got {0}")]
    InvalidSigma(f64),
}

/// A Gaussian-distributed physical quantity: a nominal value plus a
/// one-sigma uncertainty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    value: f64,
    sigma: f64,
}

impl Measurement {
    pub fn new(value: f64, sigma: f64) -> Result<Self, MeasurementError> {
        if !value.is_finite() {
            return Err(MeasurementError::NonFiniteValue(value));
        }
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(MeasurementError::InvalidSigma(sigma));
        }
        Ok(Self { value, sigma })
    }

    /// A quantity known exactly (zero uncertainty).
    pub fn exact(value: f64) -> Result<Self, MeasurementError> {
        Self::new(value, 0.0)
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

/// A point estimate with an asymmetric empirical uncertainty.
///
/// The central `value` always comes from the deterministic transform applied
/// to the nominal inputs; `lower` and `upper` summarize the dispersion of the
/// Monte-Carlo sample around that fixed value and never shift it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedEstimate {
    pub value: f64,
    pub lower: f64,
    pub upper: f64,
}

impl std::fmt::Display for DerivedEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} - {:.3} + {:.3}", self.value, self.lower, self.upper)
    }
}
