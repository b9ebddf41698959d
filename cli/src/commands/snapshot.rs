//! Snapshot command implementation
//!
//! Seeds an engine, optionally advances it, and writes its state as JSON.

use mt19937_core_rs::SeedConfig;
use std::path::Path;
use tracing::info;

use crate::Result;

/// Run the snapshot command
pub fn run(seed: &SeedConfig, skip: u64, output: &Path) -> Result<()> {
    let mut engine = seed.build()?;
    engine.discard(skip);

    let snapshot = engine.snapshot();
    std::fs::write(output, snapshot.to_json()?)?;

    info!(
        "Saved snapshot after {} words to {} (digest {})",
        skip,
        output.display(),
        snapshot.state_digest
    );
    Ok(())
}
