//! Pixels command implementation
//!
//! Builds the per-pixel state table a renderer would upload for one camera
//! and prints its size and digest, so two machines can compare tables
//! without shipping them.

use mt19937_core_rs::{compute_state_digest, StreamRegistry};
use tracing::info;

use crate::Result;

/// Run the pixels command
pub fn run(base_seed: u32, stream: u64, width: u32, height: u32) -> Result<()> {
    info!("Building pixel state table...");
    info!("  Base seed: {}", base_seed);
    info!("  Stream: {}", stream);
    info!("  Resolution: {}x{}", width, height);

    let mut registry = StreamRegistry::new(base_seed);
    let states = registry.pixel_states(stream, width, height)?;

    println!("words:  {}", states.len());
    println!("sha256: {}", compute_state_digest(states));
    Ok(())
}
