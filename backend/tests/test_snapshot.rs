//! Snapshot Tests - Save/Load Engine State
//!
//! Critical invariants tested:
//! - Determinism: A restored engine continues the original sequence
//! - Verbatim state: counters survive a JSON round trip unchanged
//! - Integrity: Tampered or impossible snapshots are rejected

use mt19937_core_rs::{
    compute_state_digest, validate_snapshot, EngineSnapshot, Mt19937, RngError, STATE_WORDS,
};

// ============================================================================
// Test Helpers
// ============================================================================

/// Engine advanced to an arbitrary mid-batch position
fn advanced_engine(seed: u32, draws: u64) -> Mt19937 {
    let mut mt = Mt19937::new(seed);
    mt.discard(draws);
    mt
}

/// Recompute the digest after editing a snapshot's words
fn reseal(mut snapshot: EngineSnapshot) -> EngineSnapshot {
    snapshot.state_digest = compute_state_digest(&snapshot.state);
    snapshot
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_restore_continues_sequence() {
    for draws in [0u64, 1, 100, 623, 624, 625, 5000] {
        let mut original = advanced_engine(42, draws);
        let mut restored = Mt19937::restore(original.snapshot()).unwrap();

        for i in 0..2000 {
            assert_eq!(
                original.next_u32(),
                restored.next_u32(),
                "Diverged {} draws after restoring at offset {}",
                i,
                draws
            );
        }
    }
}

#[test]
fn test_json_round_trip_preserves_state() {
    let original = advanced_engine(95273, 777);
    let snapshot = original.snapshot();

    let json = snapshot.to_json().unwrap();
    let parsed = EngineSnapshot::from_json(&json).unwrap();

    assert_eq!(parsed, snapshot);
    assert_eq!(parsed.state.len(), STATE_WORDS);
    assert_eq!(Mt19937::restore(parsed).unwrap(), original);
}

#[test]
fn test_snapshot_records_counters_verbatim() {
    let mt = advanced_engine(1, 10);
    let snapshot = mt.snapshot();

    assert!(snapshot.seeded);
    assert_eq!(snapshot.cursor, 10);
    assert_eq!(snapshot.remaining, STATE_WORDS as u32 + 1 - 10);
}

#[test]
fn test_freshly_seeded_snapshot_is_valid() {
    let snapshot = Mt19937::new(3).snapshot();
    assert_eq!(snapshot.remaining, 1);
    assert_eq!(snapshot.cursor, 0);
    assert!(validate_snapshot(&snapshot).is_ok());
}

// ============================================================================
// Integrity
// ============================================================================

#[test]
fn test_reject_tampered_state() {
    let mut snapshot = advanced_engine(7, 50).snapshot();
    snapshot.state[100] ^= 1;

    let result = Mt19937::restore(snapshot);
    assert!(matches!(result, Err(RngError::StateValidation(_))));
}

#[test]
fn test_reject_wrong_state_length() {
    let mut snapshot = advanced_engine(7, 50).snapshot();
    snapshot.state.pop();
    let snapshot = reseal(snapshot);

    let err = Mt19937::restore(snapshot).unwrap_err();
    assert!(err.to_string().contains("623"), "unexpected error: {}", err);
}

#[test]
fn test_reject_zero_remaining() {
    let mut snapshot = advanced_engine(7, 50).snapshot();
    snapshot.remaining = 0;

    assert!(matches!(
        validate_snapshot(&snapshot),
        Err(RngError::StateValidation(_))
    ));
}

#[test]
fn test_reject_cursor_past_end() {
    let mut snapshot = advanced_engine(7, 50).snapshot();
    snapshot.cursor = STATE_WORDS as u32 + 1;

    assert!(matches!(
        validate_snapshot(&snapshot),
        Err(RngError::StateValidation(_))
    ));
}

#[test]
fn test_reject_inconsistent_counters() {
    let mut snapshot = advanced_engine(7, 50).snapshot();
    snapshot.remaining -= 1;

    assert!(matches!(
        validate_snapshot(&snapshot),
        Err(RngError::StateValidation(_))
    ));
}

#[test]
fn test_reject_unseeded_mid_batch() {
    let mut snapshot = advanced_engine(7, 50).snapshot();
    snapshot.seeded = false;

    assert!(matches!(
        validate_snapshot(&snapshot),
        Err(RngError::StateValidation(_))
    ));
}

#[test]
fn test_reject_malformed_json() {
    let result = EngineSnapshot::from_json("{\"state\": [1, 2, 3]}");
    assert!(matches!(result, Err(RngError::Serialization(_))));
}
