use serde::{Deserialize, Serialize};

use super::measurement::Measurement;

/// The four measured quantities of one wide binary needed to derive the
/// companion's surface gravity from the differential gravitational redshift.
///
/// The primary is the star with a spectroscopic `log g` and mass estimate
/// (typically the main-sequence component); the companion is the star whose
/// surface gravity is being derived (typically the sdB). Masses are in solar
/// masses, the velocity offset between the components in km/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RedshiftSystem {
    pub logg_primary: Measurement,
    pub mass_primary: Measurement,
    pub mass_companion: Measurement,
    pub velocity_offset: Measurement,
}

impl RedshiftSystem {
    pub fn new(
        logg_primary: Measurement,
        mass_primary: Measurement,
        mass_companion: Measurement,
        velocity_offset: Measurement,
    ) -> Self {
        Self {
            logg_primary,
            mass_primary,
            mass_companion,
            velocity_offset,
        }
    }
}
