use rand::Rng;
use thiserror::Error;
use tracing::{info, instrument};

use crate::core::io::table::{MagnitudeTable, TableError};
use crate::engine::error::EngineError;
use crate::engine::zeropoint::{ZeroPointFit, ZeroPointParams, fit_zero_point};

#[derive(Debug, Error)]
pub enum CalibrationError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Tables have different numbers of rows: synthetic={synthetic}, observed={observed}")]
    RowCountMismatch { synthetic: usize, observed: usize },

    #[error("Synthetic and observed tables disagree at row {row}: '{synthetic}' vs '{observed}'")]
    NameMismatch {
        row: usize,
        synthetic: String,
        observed: String,
    },

    #[error("Minimum photometric error must be positive and finite, got {0}")]
    InvalidMinError(f64),
}

/// Configuration of one calibration run.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationConfig {
    /// Bands to calibrate, by column name.
    pub bands: Vec<String>,
    /// The two synthetic-table bands forming the color index, bluest first.
    pub color: (String, String),
    /// Floor applied to the observed errors (mag).
    pub min_error: f64,
    pub fit: ZeroPointParams,
}

/// The calibration result of one band.
#[derive(Debug, Clone, PartialEq)]
pub struct BandZeroPoint {
    pub band: String,
    pub fit: ZeroPointFit,
}

/// Floors missing or too-small observed errors at `min_error`.
fn floored_errors(raw: Option<&[f64]>, len: usize, min_error: f64) -> Vec<f64> {
    match raw {
        Some(errors) => errors
            .iter()
            .map(|&e| if e.is_finite() && e > min_error { e } else { min_error })
            .collect(),
        None => vec![min_error; len],
    }
}

/// Calibrates the zero point of every requested band against the synthetic
/// photometry.
///
/// Both tables must list the same calibrators in the same order; the color
/// index is built from the synthetic table so that observational noise does
/// not enter the abscissa.
#[instrument(skip_all, name = "zeropoint_workflow", fields(bands = config.bands.len()))]
pub fn run(
    synthetic: &MagnitudeTable,
    observed: &MagnitudeTable,
    config: &CalibrationConfig,
    rng: &mut impl Rng,
) -> Result<Vec<BandZeroPoint>, CalibrationError> {
    if synthetic.len() != observed.len() {
        return Err(CalibrationError::RowCountMismatch {
            synthetic: synthetic.len(),
            observed: observed.len(),
        });
    }
    for (row, (s, o)) in synthetic.names().iter().zip(observed.names()).enumerate() {
        if s != o {
            return Err(CalibrationError::NameMismatch {
                row: row + 1,
                synthetic: s.clone(),
                observed: o.clone(),
            });
        }
    }
    if !config.min_error.is_finite() || config.min_error <= 0.0 {
        return Err(CalibrationError::InvalidMinError(config.min_error));
    }

    let blue = synthetic.column(&config.color.0)?;
    let red = synthetic.column(&config.color.1)?;
    let color: Vec<f64> = blue.iter().zip(red).map(|(b, r)| b - r).collect();

    let mut results = Vec::with_capacity(config.bands.len());
    for band in &config.bands {
        let syn = synthetic.column(band)?;
        let obs = observed.column(band)?;
        let err = floored_errors(observed.error_column(band), obs.len(), config.min_error);

        let fit = fit_zero_point(&color, syn, obs, &err, &config.fit, rng)?;
        info!(
            band = band.as_str(),
            zero_point = fit.zero_point,
            error = fit.zero_point_error,
            slope = fit.slope,
            accepted = fit.accepted,
            rejected = fit.rejected,
            "Calibrated band"
        );
        results.push(BandZeroPoint {
            band: band.clone(),
            fit,
        });
    }
    Ok(results)
}
