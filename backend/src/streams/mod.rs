//! Per-stream engines and per-pixel seed tables
//!
//! A renderer keeps one independent random stream per camera, and each
//! camera needs a table of raw words (four per pixel) to seed its
//! per-pixel noise generators. The registry owns those engines and tables
//! explicitly; nothing here is global.
//!
//! # Stream Seeding
//!
//! Stream `id` is array-seeded with `[base_seed, low32(id), high32(id)]`, so
//! streams never share a sequence and the same `(base_seed, id)` always
//! reproduces the same words.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

use crate::rng::{Mt19937, RngError};

/// Raw words generated for every pixel
pub const WORDS_PER_PIXEL: usize = 4;

/// Build the seeding key for one stream
pub fn stream_key(base_seed: u32, stream_id: u64) -> [u32; 3] {
    [base_seed, stream_id as u32, (stream_id >> 32) as u32]
}

/// Fresh engine for one stream
pub fn stream_engine(base_seed: u32, stream_id: u64) -> Mt19937 {
    let mut engine = Mt19937::default();
    engine.init_by_array(&stream_key(base_seed, stream_id));
    engine
}

/// Draw `width * height * WORDS_PER_PIXEL` raw words from `engine`
///
/// # Errors
/// Returns [`RngError::InvalidArgument`] for a zero dimension or a table too
/// large to address.
pub fn fill_pixel_states(
    engine: &mut Mt19937,
    width: u32,
    height: u32,
) -> Result<Vec<u32>, RngError> {
    if width == 0 || height == 0 {
        return Err(RngError::InvalidArgument(format!(
            "Pixel table dimensions must be non-zero, got {}x{}",
            width, height
        )));
    }

    let count = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(WORDS_PER_PIXEL))
        .ok_or_else(|| {
            RngError::InvalidArgument(format!(
                "Pixel table {}x{} is too large",
                width, height
            ))
        })?;

    Ok((0..count).map(|_| engine.next_u32()).collect())
}

#[derive(Debug, Clone)]
struct PixelStateTable {
    width: u32,
    height: u32,
    words: Vec<u32>,
}

/// Owns one engine and one pixel table per stream
///
/// # Example
/// ```
/// use mt19937_core_rs::StreamRegistry;
///
/// let mut registry = StreamRegistry::new(95273);
/// let camera = 17;
///
/// let jitter = registry.engine(camera).next_f64_half_open();
/// assert!(jitter >= 0.0 && jitter < 1.0);
///
/// let states = registry.pixel_states(camera, 4, 2).unwrap();
/// assert_eq!(states.len(), 4 * 2 * 4);
/// ```
#[derive(Debug, Clone)]
pub struct StreamRegistry {
    base_seed: u32,
    engines: HashMap<u64, Mt19937>,
    pixel_tables: HashMap<u64, PixelStateTable>,
}

impl StreamRegistry {
    pub fn new(base_seed: u32) -> Self {
        Self {
            base_seed,
            engines: HashMap::new(),
            pixel_tables: HashMap::new(),
        }
    }

    pub fn base_seed(&self) -> u32 {
        self.base_seed
    }

    /// Engine for `stream_id`, created on first use
    pub fn engine(&mut self, stream_id: u64) -> &mut Mt19937 {
        let base_seed = self.base_seed;
        self.engines.entry(stream_id).or_insert_with(|| {
            debug!(stream_id, "created MT19937 stream");
            stream_engine(base_seed, stream_id)
        })
    }

    /// Per-pixel raw words for `stream_id` at the given resolution
    ///
    /// The table is drawn from a dedicated engine seeded like the stream, so
    /// it does not depend on how many words [`Self::engine`] has handed out.
    /// It is cached and only rebuilt when the resolution changes.
    pub fn pixel_states(
        &mut self,
        stream_id: u64,
        width: u32,
        height: u32,
    ) -> Result<&[u32], RngError> {
        let base_seed = self.base_seed;
        let build = || -> Result<PixelStateTable, RngError> {
            let mut engine = stream_engine(base_seed, stream_id);
            let words = fill_pixel_states(&mut engine, width, height)?;
            debug!(stream_id, width, height, "built pixel state table");
            Ok(PixelStateTable {
                width,
                height,
                words,
            })
        };

        match self.pixel_tables.entry(stream_id) {
            Entry::Occupied(mut entry) => {
                let table = entry.get();
                if table.width != width || table.height != height {
                    *entry.get_mut() = build()?;
                }
                Ok(&entry.into_mut().words)
            }
            Entry::Vacant(entry) => Ok(&entry.insert(build()?).words),
        }
    }

    /// Drop the engine and pixel table for one stream
    ///
    /// Returns true if anything was released.
    pub fn release(&mut self, stream_id: u64) -> bool {
        let had_engine = self.engines.remove(&stream_id).is_some();
        let had_table = self.pixel_tables.remove(&stream_id).is_some();
        had_engine || had_table
    }

    pub fn clear(&mut self) {
        self.engines.clear();
        self.pixel_tables.clear();
    }

    /// Number of live stream engines
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_key_splits_id() {
        assert_eq!(stream_key(7, 0x0000_0003_0000_0002), [7, 2, 3]);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let mut engine = Mt19937::new(1);
        assert!(matches!(
            fill_pixel_states(&mut engine, 0, 8),
            Err(RngError::InvalidArgument(_))
        ));
        assert!(matches!(
            fill_pixel_states(&mut engine, 8, 0),
            Err(RngError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_release_unknown_stream() {
        let mut registry = StreamRegistry::new(1);
        assert!(!registry.release(99));
    }
}
