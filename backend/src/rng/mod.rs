//! Deterministic random number generation
//!
//! Uses the MT19937 Mersenne Twister for reproducible sequences.
//! CRITICAL: Every consumer that needs reproducible randomness (scene
//! layout, material sampling, per-pixel noise seeds) MUST draw from an
//! engine owned through this module.

mod error;
mod mt19937;
mod snapshot;
pub mod variates;

pub use error::RngError;
pub use mt19937::{Mt19937, ARRAY_SEED_BASE, DEFAULT_SEED, STATE_WORDS};
pub use snapshot::{compute_state_digest, validate_snapshot, EngineSnapshot};
pub use variates::{Variate, VariateValue};
