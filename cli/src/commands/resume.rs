//! Resume command implementation

use mt19937_core_rs::{EngineSnapshot, Mt19937, Variate};
use std::path::Path;
use tracing::info;

use super::print_variates;
use crate::{CliError, Result};

/// Run the resume command
pub fn run(input: &Path, count: usize, variate: Variate) -> Result<()> {
    if !input.exists() {
        return Err(CliError::FileNotFound(input.display().to_string()));
    }

    let json = std::fs::read_to_string(input)?;
    let snapshot = EngineSnapshot::from_json(&json)?;
    let mut engine = Mt19937::restore(snapshot)?;
    info!("Resumed from {}", input.display());

    print_variates(&mut engine, count, variate)?;
    Ok(())
}
