//! Snapshot - Save/Load Engine State
//!
//! Serializes the complete engine state so a sequence can be paused and
//! resumed later without replaying every draw.
//!
//! # Critical Invariants
//!
//! - **Determinism**: A restored engine continues with exactly the words the
//!   original would have produced
//! - **Verbatim state**: `state`, `remaining` and `cursor` are persisted as-is
//! - **Integrity**: A snapshot whose words no longer match its digest is
//!   rejected

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use super::error::RngError;
use super::mt19937::{Mt19937, STATE_WORDS};

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Complete engine state snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// All 624 state words
    pub state: Vec<u32>,

    /// Words left in the current batch
    pub remaining: u32,

    /// Index of the next word to emit
    pub cursor: u32,

    /// Whether the engine had been seeded
    pub seeded: bool,

    /// SHA256 of `state` (for validation)
    pub state_digest: String,
}

impl EngineSnapshot {
    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, RngError> {
        serde_json::to_string_pretty(self).map_err(|e| {
            RngError::Serialization(format!("Snapshot serialization failed: {}", e))
        })
    }

    /// Parse from JSON (no invariant checks; see [`Mt19937::restore`])
    pub fn from_json(json: &str) -> Result<Self, RngError> {
        serde_json::from_str(json).map_err(|e| {
            RngError::Serialization(format!("Snapshot deserialization failed: {}", e))
        })
    }
}

// ============================================================================
// State Digest
// ============================================================================

/// Compute SHA256 of the state words, lowercase hex
///
/// Words are hashed in little-endian byte order so the digest is identical
/// on every platform.
pub fn compute_state_digest(state: &[u32]) -> String {
    let mut hasher = Sha256::new();
    for word in state {
        hasher.update(word.to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// Validation
// ============================================================================

/// Validate snapshot integrity
///
/// Checks critical invariants:
/// - State length
/// - Batch counters describe a reachable position
/// - Digest matches the words
pub fn validate_snapshot(snapshot: &EngineSnapshot) -> Result<(), RngError> {
    // 1. State length
    if snapshot.state.len() != STATE_WORDS {
        return Err(RngError::StateValidation(format!(
            "Expected {} state words, got {}",
            STATE_WORDS,
            snapshot.state.len()
        )));
    }

    // 2. Counter ranges
    let n = STATE_WORDS as u32;
    if snapshot.remaining == 0 || snapshot.remaining > n {
        return Err(RngError::StateValidation(format!(
            "remaining {} outside [1, {}]",
            snapshot.remaining, n
        )));
    }
    if snapshot.cursor > n {
        return Err(RngError::StateValidation(format!(
            "cursor {} exceeds {}",
            snapshot.cursor, n
        )));
    }

    // 3. Batch consistency: either freshly seeded, or mid-batch
    let fresh = snapshot.remaining == 1 && snapshot.cursor == 0;
    let mid_batch = snapshot.remaining + snapshot.cursor == n + 1;
    if !snapshot.seeded && !fresh {
        return Err(RngError::StateValidation(
            "Unseeded engine must not have drawn any words".to_string(),
        ));
    }
    if !fresh && !mid_batch {
        return Err(RngError::StateValidation(format!(
            "Inconsistent batch position: remaining {} with cursor {}",
            snapshot.remaining, snapshot.cursor
        )));
    }

    // 4. Digest
    let digest = compute_state_digest(&snapshot.state);
    if digest != snapshot.state_digest {
        return Err(RngError::StateValidation(format!(
            "State digest mismatch: expected {}, computed {}",
            snapshot.state_digest, digest
        )));
    }

    Ok(())
}

// ============================================================================
// Engine Save/Restore
// ============================================================================

impl Mt19937 {
    /// Capture the full engine state
    ///
    /// # Example
    /// ```
    /// use mt19937_core_rs::Mt19937;
    ///
    /// let mut mt = Mt19937::new(42);
    /// mt.discard(10);
    ///
    /// let snapshot = mt.snapshot();
    /// let mut resumed = Mt19937::restore(snapshot).unwrap();
    /// assert_eq!(mt.next_u32(), resumed.next_u32());
    /// ```
    pub fn snapshot(&self) -> EngineSnapshot {
        debug!(
            remaining = self.remaining,
            cursor = self.cursor,
            "captured MT19937 snapshot"
        );
        EngineSnapshot {
            state: self.state.to_vec(),
            remaining: self.remaining,
            cursor: self.cursor as u32,
            seeded: self.seeded,
            state_digest: compute_state_digest(&self.state),
        }
    }

    /// Rebuild an engine from a snapshot
    ///
    /// # Errors
    /// Returns [`RngError::StateValidation`] if the snapshot fails
    /// [`validate_snapshot`].
    pub fn restore(snapshot: EngineSnapshot) -> Result<Self, RngError> {
        if let Err(e) = validate_snapshot(&snapshot) {
            warn!(error = %e, "rejected MT19937 snapshot");
            return Err(e);
        }

        let mut state = [0u32; STATE_WORDS];
        state.copy_from_slice(&snapshot.state);

        debug!(
            remaining = snapshot.remaining,
            cursor = snapshot.cursor,
            "restored MT19937 snapshot"
        );
        Ok(Self {
            state,
            remaining: snapshot.remaining,
            cursor: snapshot.cursor as usize,
            seeded: snapshot.seeded,
        })
    }
}
