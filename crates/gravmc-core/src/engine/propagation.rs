//! Monte-Carlo propagation of measurement uncertainties through the
//! redshift transform.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::{debug, instrument, warn};

use super::error::EngineError;
use super::transform::companion_logg;
use crate::core::models::measurement::{DerivedEstimate, Measurement};
use crate::core::models::system::RedshiftSystem;
use crate::core::stats::asymmetric_errors;

fn draw(
    name: &'static str,
    measurement: &Measurement,
    n: usize,
    rng: &mut impl Rng,
) -> Result<Vec<f64>, EngineError> {
    let dist = Normal::new(measurement.value(), measurement.sigma())
        .map_err(|source| EngineError::Sampling { name, source })?;
    Ok((0..n).map(|_| dist.sample(rng)).collect())
}

/// Propagates the four input uncertainties through the redshift transform.
///
/// The central value is the transform applied once to the nominal inputs and
/// is never perturbed. Four independent batches of `n` normal draws are
/// pushed through the transform element-wise, and the dispersion of the
/// resulting sample around the central value becomes the asymmetric error.
///
/// Draws that land outside the transform's domain (a Gaussian mass can go
/// negative) are discarded and counted; the reference method lets these
/// become NaN, which its one-sided subsets silently drop, so discarding
/// reproduces the same dispersion estimate without the silent NaNs.
#[instrument(level = "debug", skip_all, fields(samples = n))]
pub fn propagate(
    system: &RedshiftSystem,
    n: usize,
    rng: &mut impl Rng,
) -> Result<DerivedEstimate, EngineError> {
    let central = companion_logg(
        system.logg_primary.value(),
        system.mass_primary.value(),
        system.mass_companion.value(),
        system.velocity_offset.value(),
    )?;

    let logg = draw("logg_primary", &system.logg_primary, n, rng)?;
    let mass_primary = draw("mass_primary", &system.mass_primary, n, rng)?;
    let mass_companion = draw("mass_companion", &system.mass_companion, n, rng)?;
    let velocity_offset = draw("velocity_offset", &system.velocity_offset, n, rng)?;

    let mut noisy = Vec::with_capacity(n);
    let mut discarded = 0usize;
    for i in 0..n {
        match companion_logg(logg[i], mass_primary[i], mass_companion[i], velocity_offset[i]) {
            Ok(value) => noisy.push(value),
            Err(_) => discarded += 1,
        }
    }

    if discarded > 0 {
        debug!(discarded, n, "Discarded out-of-domain Monte-Carlo draws");
        if discarded * 10 > n {
            warn!(
                discarded,
                n,
                "More than 10% of Monte-Carlo draws were out of the transform's domain; \
                 the input uncertainties may be too large for a Gaussian model"
            );
        }
    }

    let (lower, upper) = asymmetric_errors(&noisy, central)?;
    Ok(DerivedEstimate {
        value: central,
        lower,
        upper,
    })
}
