//! # Engine Module
//!
//! The computational procedures: the deterministic redshift transform, the
//! Monte-Carlo propagation of measurement uncertainties, and the zero-point
//! Monte-Carlo fit with sigma clipping. Every routine is a pure function of
//! its inputs and the supplied random-number generator; there is no state
//! shared between calls.

pub mod error;
pub mod propagation;
pub mod transform;
pub mod zeropoint;
