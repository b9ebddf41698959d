//! PyO3 bindings
//!
//! Only compiled with the `pyo3` feature.

pub mod engine;
