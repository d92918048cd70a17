//! The deterministic gravitational-redshift transform.
//!
//! Maps the primary's surface gravity and both component masses, plus the
//! measured velocity offset between the components, to the companion's
//! log surface gravity. Pure element-wise arithmetic; all randomness lives
//! in the propagation routine.

use thiserror::Error;

use crate::core::constants::{GRAVITATIONAL_CONSTANT_CGS, SOLAR_MASS_CGS, SPEED_OF_LIGHT_CGS};
use crate::core::units::{cm_s_to_km_s, km_s_to_cm_s};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    #[error("Input '{name}' must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("Mass '{name}' must be positive, got {value} Msol")]
    NonPositiveMass { name: &'static str, value: f64 },
    #[error("Total redshift velocity is zero; companion surface gravity is undefined")]
    ZeroVelocity,
}

fn check_finite(name: &'static str, value: f64) -> Result<f64, TransformError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TransformError::NonFinite { name, value })
    }
}

fn check_mass(name: &'static str, value: f64) -> Result<f64, TransformError> {
    check_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(TransformError::NonPositiveMass { name, value })
    }
}

/// Gravitational redshift of a star in km/s, from its log surface gravity
/// (cgs dex) and mass (solar masses).
///
/// With `g = 10^logg` and `R = sqrt(G·M/g)` this is `G·M/(R·c) =
/// sqrt(G·M·g)/c`.
pub fn redshift_velocity_km_s(logg: f64, mass: f64) -> Result<f64, TransformError> {
    check_finite("logg", logg)?;
    check_mass("mass", mass)?;

    let g = 10f64.powf(logg);
    let mass_cgs = mass * SOLAR_MASS_CGS;
    let velocity_cgs = g / SPEED_OF_LIGHT_CGS * (GRAVITATIONAL_CONSTANT_CGS * mass_cgs / g).sqrt();
    Ok(cm_s_to_km_s(velocity_cgs))
}

/// The companion's log surface gravity (cgs dex) from the primary's
/// parameters and the velocity offset between the components (km/s).
///
/// The offset is the part of the apparent radial-velocity difference
/// attributed to differential gravitational redshift: the companion's own
/// redshift is the primary's redshift plus the offset, and inverting the
/// redshift formula for the companion's mass yields its surface gravity.
pub fn companion_logg(
    logg_primary: f64,
    mass_primary: f64,
    mass_companion: f64,
    velocity_offset: f64,
) -> Result<f64, TransformError> {
    check_finite("velocity_offset", velocity_offset)?;
    check_mass("mass_companion", mass_companion)?;

    let redshift_primary = redshift_velocity_km_s(logg_primary, mass_primary)?;
    let redshift_companion = redshift_primary + velocity_offset;
    if redshift_companion == 0.0 {
        return Err(TransformError::ZeroVelocity);
    }

    let velocity_cgs = km_s_to_cm_s(redshift_companion);
    let mass_cgs = mass_companion * SOLAR_MASS_CGS;
    let logg = (velocity_cgs.powi(2) * SPEED_OF_LIGHT_CGS.powi(2)
        / (GRAVITATIONAL_CONSTANT_CGS * mass_cgs))
        .log10();
    Ok(logg)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn redshift_velocity_matches_reference_value() {
        // Sun-like star: logg = 4.0, M = 1 Msol.
        let v = redshift_velocity_km_s(4.0, 1.0).unwrap();
        assert!(f64_approx_equal(v, 0.3842687984794869));
    }

    #[test]
    fn companion_logg_matches_reference_value() {
        let logg = companion_logg(4.0, 1.0, 0.5, 1.0).unwrap();
        assert!(f64_approx_equal(logg, 5.4142006107509));
    }

    #[test]
    fn companion_logg_reproduces_he0430_case() {
        let logg = companion_logg(4.50, 0.73, 0.18, 2.009).unwrap();
        assert!(f64_approx_equal(logg, 6.403009904846306));
    }

    #[test]
    fn redshift_scales_as_square_root_of_mass_at_fixed_logg() {
        let v1 = redshift_velocity_km_s(4.5, 1.0).unwrap();
        let v4 = redshift_velocity_km_s(4.5, 4.0).unwrap();
        assert!(f64_approx_equal(v4, 2.0 * v1));
    }

    #[test]
    fn non_positive_masses_are_rejected() {
        assert!(matches!(
            companion_logg(4.0, 0.0, 0.5, 1.0),
            Err(TransformError::NonPositiveMass { name: "mass", .. })
        ));
        assert!(matches!(
            companion_logg(4.0, 1.0, -0.2, 1.0),
            Err(TransformError::NonPositiveMass {
                name: "mass_companion",
                ..
            })
        ));
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        assert!(matches!(
            companion_logg(f64::NAN, 1.0, 0.5, 1.0),
            Err(TransformError::NonFinite { name: "logg", .. })
        ));
        assert!(matches!(
            companion_logg(4.0, 1.0, 0.5, f64::INFINITY),
            Err(TransformError::NonFinite {
                name: "velocity_offset",
                ..
            })
        ));
    }

    #[test]
    fn cancelling_velocity_offset_is_a_domain_error() {
        let v = redshift_velocity_km_s(4.0, 1.0).unwrap();
        let result = companion_logg(4.0, 1.0, 0.5, -v);
        assert!(matches!(result, Err(TransformError::ZeroVelocity)));
    }

    #[test]
    fn negative_total_velocity_still_yields_a_finite_gravity() {
        // The redshift enters squared, so an over-corrected offset is
        // numerically defined even if physically suspect.
        let logg = companion_logg(4.0, 1.0, 0.5, -2.0).unwrap();
        assert!(logg.is_finite());
    }
}
