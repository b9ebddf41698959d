//! MT19937 Core - Rust Engine
//!
//! Bit-exact Mersenne Twister used for every reproducible random stream in
//! the ray-tracing tutorial: scene layout, material colour sampling and
//! per-pixel noise seeding.
//!
//! # Architecture
//!
//! - **rng**: The engine, its variate conversions and state snapshots
//! - **streams**: Per-camera engines and per-pixel seed tables
//! - **config**: Serializable seeding configuration
//!
//! # Critical Invariants
//!
//! 1. Same seed + same draw calls = same output, on every platform
//! 2. All state arithmetic is 32-bit with explicit wraparound
//! 3. Engines are owned values; there is no global instance

// Module declarations
pub mod config;
pub mod rng;
pub mod streams;

// Re-exports for convenience
pub use config::SeedConfig;
pub use rng::{
    compute_state_digest, validate_snapshot, EngineSnapshot, Mt19937, RngError, Variate,
    VariateValue, DEFAULT_SEED, STATE_WORDS,
};
pub use streams::{fill_pixel_states, StreamRegistry, WORDS_PER_PIXEL};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn mt19937_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::engine::PyMersenneTwister>()?;
    Ok(())
}
