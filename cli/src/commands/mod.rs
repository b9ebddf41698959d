//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod draw;
pub mod pixels;
pub mod resume;
pub mod snapshot;

use mt19937_core_rs::{Mt19937, Variate};
use std::io::{self, BufWriter, Write};

/// Print `count` values of `variate`, one per line
pub(crate) fn print_variates(
    engine: &mut Mt19937,
    count: usize,
    variate: Variate,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for _ in 0..count {
        writeln!(out, "{}", variate.sample(engine))?;
    }
    out.flush()
}
