//! Tabular data input. The library parses exactly one format: comma-separated
//! magnitude tables. Spectral formats (FITS, HDF5) are out of scope; callers
//! hand the core already-parsed numeric arrays.

pub mod table;
