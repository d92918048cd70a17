//! Velocity unit conversions.
//!
//! The redshift transform mixes cgs intermediates with velocity offsets
//! quoted in km/s; these are the only conversions the library needs.

/// Number of cm/s in one km/s.
pub const CM_S_PER_KM_S: f64 = 1.0e5;

#[inline]
pub fn cm_s_to_km_s(velocity: f64) -> f64 {
    velocity / CM_S_PER_KM_S
}

#[inline]
pub fn km_s_to_cm_s(velocity: f64) -> f64 {
    velocity * CM_S_PER_KM_S
}
