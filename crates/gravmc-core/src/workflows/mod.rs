//! # Workflows Module
//!
//! The public, user-facing entry points. Each workflow ties the core models
//! and the engine routines into one complete scientific procedure: deriving
//! companion surface gravities from gravitational redshifts, and calibrating
//! photometric zero points against reference spectra photometry.

pub mod redshift;
pub mod zeropoint;
