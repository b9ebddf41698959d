//! Draw command implementation

use mt19937_core_rs::{SeedConfig, Variate};
use tracing::info;

use super::print_variates;
use crate::Result;

/// Run the draw command
pub fn run(seed: &SeedConfig, count: usize, variate: Variate, skip: u64) -> Result<()> {
    info!("Drawing from MT19937...");
    info!("  Seed: {:?}", seed);
    info!("  Variate: {}", variate);
    info!("  Count: {}", count);

    let mut engine = seed.build()?;
    if skip > 0 {
        info!("  Skipping {} words", skip);
        engine.discard(skip);
    }

    print_variates(&mut engine, count, variate)?;
    Ok(())
}
