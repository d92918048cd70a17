//! Physical constants in cgs units.
//!
//! The values match the constant set of the IvS reference tables so that
//! derived surface gravities are directly comparable with the published
//! numbers.

/// Newtonian gravitational constant, in cm³ g⁻¹ s⁻².
pub const GRAVITATIONAL_CONSTANT_CGS: f64 = 6.67384e-8;

/// Speed of light in vacuum, in cm s⁻¹.
pub const SPEED_OF_LIGHT_CGS: f64 = 2.99792458e10;

/// Solar mass, in g.
pub const SOLAR_MASS_CGS: f64 = 1.988547e33;
