//! # gravmc Core Library
//!
//! Monte-Carlo error propagation for stellar astrophysics: deriving the
//! surface gravity of a compact companion from the differential
//! gravitational redshift in a wide binary, and calibrating photometric
//! zero points against synthetic reference photometry.
//!
//! ## Architectural Philosophy
//!
//! The library is organized in three layers with a strict separation of
//! concerns:
//!
//! - **[`core`]: The Foundation.** Stateless models ([`core::models`]),
//!   physical constants and unit conversions, statistical summaries
//!   ([`core::stats`]), weighted least squares ([`core::fitting`]), and
//!   magnitude-table I/O ([`core::io`]).
//!
//! - **[`engine`]: The Logic Core.** The deterministic redshift transform,
//!   the Monte-Carlo uncertainty propagation, and the zero-point fit with
//!   sigma clipping. Every routine takes its random-number generator as an
//!   argument, so a seeded generator makes any result bit-reproducible.
//!
//! - **[`workflows`]: The Public API.** Complete procedures over named
//!   targets and calibration tables, tying `core` and `engine` together.

pub mod core;
pub mod engine;
pub mod workflows;
