//! PyO3 wrapper for Mt19937
//!
//! Exposes the engine under the method names of the reference C library so
//! Python tooling can reproduce the renderer's random streams.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::rng::{EngineSnapshot, Mt19937, RngError};

impl From<RngError> for PyErr {
    fn from(err: RngError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Python wrapper for the Rust engine
///
/// # Example (from Python)
///
/// ```python
/// from mt19937_core_rs import MersenneTwister
///
/// mt = MersenneTwister(5489)
/// assert mt.genrand_int32() == 3499211612
///
/// saved = mt.snapshot_json()
/// a = mt.genrand_res53()
/// mt.restore_json(saved)
/// assert mt.genrand_res53() == a
/// ```
#[pyclass(name = "MersenneTwister")]
pub struct PyMersenneTwister {
    inner: Mt19937,
}

#[pymethods]
impl PyMersenneTwister {
    /// Create an engine, seeded if `seed` is given
    ///
    /// An unseeded engine seeds itself with 5489 on first draw.
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u32>) -> Self {
        let inner = match seed {
            Some(seed) => Mt19937::new(seed),
            None => Mt19937::default(),
        };
        PyMersenneTwister { inner }
    }

    fn init_genrand(&mut self, seed: u32) {
        self.inner.reseed(seed);
    }

    /// Raises ValueError for an empty key
    fn init_by_array(&mut self, key: Vec<u32>) -> PyResult<()> {
        self.inner.reseed_by_array(&key)?;
        Ok(())
    }

    fn genrand_int32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn genrand_int31(&mut self) -> i32 {
        self.inner.next_u31()
    }

    fn genrand_real1(&mut self) -> f64 {
        self.inner.next_f64_closed()
    }

    fn genrand_real2(&mut self) -> f64 {
        self.inner.next_f64_half_open()
    }

    fn genrand_real3(&mut self) -> f64 {
        self.inner.next_f64_open()
    }

    fn genrand_res53(&mut self) -> f64 {
        self.inner.next_f64_res53()
    }

    /// Serialize the full engine state to JSON
    fn snapshot_json(&self) -> PyResult<String> {
        Ok(self.inner.snapshot().to_json()?)
    }

    /// Replace the engine state with a JSON snapshot
    ///
    /// Raises ValueError if the snapshot is malformed or fails validation;
    /// the current state is kept in that case.
    fn restore_json(&mut self, json: &str) -> PyResult<()> {
        let snapshot = EngineSnapshot::from_json(json)?;
        self.inner = Mt19937::restore(snapshot)?;
        Ok(())
    }

    fn is_seeded(&self) -> bool {
        self.inner.is_seeded()
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.inner)
    }
}
