//! Error type for the random number engine and its collaborators
//!
//! The draw path never fails. Errors only arise at the boundaries:
//! seeding with an empty key, restoring a corrupt snapshot, or
//! (de)serializing engine state.

use thiserror::Error;

/// Errors reported by seeding, snapshot and stream operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RngError {
    /// Caller passed an argument the engine cannot accept (e.g. empty key)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A snapshot does not describe a reachable engine state
    #[error("State validation failed: {0}")]
    StateValidation(String),

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}
