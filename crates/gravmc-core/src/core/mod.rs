//! # Core Module
//!
//! Stateless building blocks for the Monte-Carlo analyses: physical constants,
//! unit conversions, the measurement data model, statistical summaries,
//! weighted least squares, and magnitude-table I/O.
//!
//! Nothing in this layer draws random numbers or holds state; the engine
//! layer composes these pieces into the actual procedures.

pub mod constants;
pub mod fitting;
pub mod io;
pub mod models;
pub mod stats;
pub mod units;
