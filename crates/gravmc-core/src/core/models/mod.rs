//! Data models shared across the library: measured quantities, derived
//! estimates, and the per-target input bundle.

pub mod measurement;
pub mod system;
