//! MT19937 Mersenne Twister engine
//!
//! 32-bit Mersenne Twister with a period of 2^19937 - 1, as published by
//! Matsumoto and Nishimura (mt19937ar, 2002 seeding).
//!
//! # Algorithm
//!
//! The engine keeps 624 words of state. Words are handed out one at a
//! time through a tempering transform; when a batch is used up, the whole
//! array is regenerated in place ("twisted") before the next word is read.
//! Regeneration is lazy: it happens inside the draw that empties the batch.
//!
//! # Determinism
//!
//! Same seed → same sequence of words, bit for bit, on every platform.
//! All arithmetic is 32-bit with explicit wraparound.

use rand_core::{impls, Error as RandError, RngCore, SeedableRng};
use std::fmt;
use tracing::{debug, trace};

use super::error::RngError;
use super::variates;

/// Number of state words (N)
pub const STATE_WORDS: usize = 624;

/// Lookback offset used by the twist (M)
const SHIFT_SIZE: usize = 397;

const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;
const MAG01: [u32; 2] = [0, MATRIX_A];

const INIT_MULTIPLIER: u32 = 1_812_433_253;
const ARRAY_MIX_MULTIPLIER_1: u32 = 1_664_525;
const ARRAY_MIX_MULTIPLIER_2: u32 = 1_566_083_941;

/// Seed used when a draw reaches an engine that was never seeded
pub const DEFAULT_SEED: u32 = 5489;

/// Scalar seed applied before array mixing
pub const ARRAY_SEED_BASE: u32 = 19_650_218;

/// MT19937 pseudo-random number engine
///
/// Not cryptographically secure. One instance must only be driven from one
/// place at a time; callers that need several independent streams own
/// several engines (see [`crate::streams::StreamRegistry`]).
///
/// # Example
/// ```
/// use mt19937_core_rs::Mt19937;
///
/// let mut mt = Mt19937::new(5489);
/// assert_eq!(mt.next_u32(), 3499211612);
///
/// let u = mt.next_f64_half_open();
/// assert!(u >= 0.0 && u < 1.0);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Mt19937 {
    pub(super) state: [u32; STATE_WORDS],
    /// Words left in the batch, counting the draw that triggers regeneration
    pub(super) remaining: u32,
    /// Index of the next word to emit
    pub(super) cursor: usize,
    pub(super) seeded: bool,
}

impl Default for Mt19937 {
    /// Unseeded engine. The first draw seeds it with [`DEFAULT_SEED`].
    fn default() -> Self {
        Self {
            state: [0; STATE_WORDS],
            remaining: 1,
            cursor: 0,
            seeded: false,
        }
    }
}

impl fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt19937")
            .field("remaining", &self.remaining)
            .field("cursor", &self.cursor)
            .field("seeded", &self.seeded)
            .finish_non_exhaustive()
    }
}

impl Mt19937 {
    /// Create an engine seeded from a single 32-bit value
    ///
    /// # Example
    /// ```
    /// use mt19937_core_rs::Mt19937;
    ///
    /// let mut a = Mt19937::new(95273);
    /// let mut b = Mt19937::new(95273);
    /// assert_eq!(a.next_u32(), b.next_u32());
    /// ```
    pub fn new(seed: u32) -> Self {
        let mut engine = Self::default();
        engine.reseed(seed);
        engine
    }

    /// Create an engine seeded from a key of 32-bit words
    ///
    /// # Errors
    /// Returns [`RngError::InvalidArgument`] if `key` is empty.
    ///
    /// # Example
    /// ```
    /// use mt19937_core_rs::Mt19937;
    ///
    /// let mut mt = Mt19937::from_key(&[0x123, 0x234, 0x345, 0x456]).unwrap();
    /// assert_eq!(mt.next_u32(), 1067595299);
    /// ```
    pub fn from_key(key: &[u32]) -> Result<Self, RngError> {
        let mut engine = Self::default();
        engine.reseed_by_array(key)?;
        Ok(engine)
    }

    /// Reset the sequence from a scalar seed
    pub fn reseed(&mut self, seed: u32) {
        self.init_genrand(seed);
        debug!(seed, "seeded MT19937 from scalar");
    }

    /// Reset the sequence from a key of 32-bit words
    ///
    /// The engine is left untouched when the key is rejected.
    ///
    /// # Errors
    /// Returns [`RngError::InvalidArgument`] if `key` is empty.
    pub fn reseed_by_array(&mut self, key: &[u32]) -> Result<(), RngError> {
        if key.is_empty() {
            return Err(RngError::InvalidArgument(
                "Seeding key must contain at least one word".to_string(),
            ));
        }
        self.init_by_array(key);
        debug!(key_len = key.len(), "seeded MT19937 from key");
        Ok(())
    }

    /// Whether either seeding mode has run
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Number of words emitted since the last regeneration
    pub fn draws_since_regeneration(&self) -> usize {
        self.cursor
    }

    /// Next tempered 32-bit word
    ///
    /// This is the only place raw state is consumed.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.remaining -= 1;
        if self.remaining == 0 {
            self.regenerate();
        }

        let word = self.state[self.cursor];
        self.cursor += 1;
        temper(word)
    }

    /// Integer on [0, 0x7fffffff]
    #[inline]
    pub fn next_u31(&mut self) -> i32 {
        variates::int31(self.next_u32())
    }

    /// Real on [0, 1]
    #[inline]
    pub fn next_f64_closed(&mut self) -> f64 {
        variates::real1(self.next_u32())
    }

    /// Real on [0, 1)
    #[inline]
    pub fn next_f64_half_open(&mut self) -> f64 {
        variates::real2(self.next_u32())
    }

    /// Real on (0, 1)
    #[inline]
    pub fn next_f64_open(&mut self) -> f64 {
        variates::real3(self.next_u32())
    }

    /// Real on [0, 1) with 53-bit resolution, consuming two words
    #[inline]
    pub fn next_f64_res53(&mut self) -> f64 {
        let a = self.next_u32();
        let b = self.next_u32();
        variates::res53(a, b)
    }

    /// Advance the sequence by `count` words without returning them
    pub fn discard(&mut self, count: u64) {
        for _ in 0..count {
            self.next_u32();
        }
    }

    fn init_genrand(&mut self, seed: u32) {
        let mt = &mut self.state;
        mt[0] = seed;
        for i in 1..STATE_WORDS {
            let prev = mt[i - 1];
            mt[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }

        self.remaining = 1;
        self.cursor = 0;
        self.seeded = true;
    }

    /// Callers guarantee `key` is non-empty.
    pub(crate) fn init_by_array(&mut self, key: &[u32]) {
        self.init_genrand(ARRAY_SEED_BASE);

        let mt = &mut self.state;
        let mut i = 1usize;
        let mut j = 0usize;

        for _ in 0..STATE_WORDS.max(key.len()) {
            let prev = mt[i - 1];
            mt[i] = (mt[i] ^ (prev ^ (prev >> 30)).wrapping_mul(ARRAY_MIX_MULTIPLIER_1))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= STATE_WORDS {
                mt[0] = mt[STATE_WORDS - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }

        for _ in 0..STATE_WORDS - 1 {
            let prev = mt[i - 1];
            mt[i] = (mt[i] ^ (prev ^ (prev >> 30)).wrapping_mul(ARRAY_MIX_MULTIPLIER_2))
                .wrapping_sub(i as u32);
            i += 1;
            if i >= STATE_WORDS {
                mt[0] = mt[STATE_WORDS - 1];
                i = 1;
            }
        }

        // MSB set: the state vector can never be all zeros
        mt[0] = UPPER_MASK;

        self.remaining = 1;
        self.cursor = 0;
        self.seeded = true;
    }

    /// Regenerate all state words and start a new batch
    fn regenerate(&mut self) {
        if !self.seeded {
            debug!(seed = DEFAULT_SEED, "unseeded MT19937 drawn from, using default seed");
            self.init_genrand(DEFAULT_SEED);
        }

        const N: usize = STATE_WORDS;
        const M: usize = SHIFT_SIZE;
        let mt = &mut self.state;

        for p in 0..N - M {
            mt[p] = mt[p + M] ^ twist(mt[p], mt[p + 1]);
        }
        for p in N - M..N - 1 {
            mt[p] = mt[p + M - N] ^ twist(mt[p], mt[p + 1]);
        }
        mt[N - 1] = mt[M - 1] ^ twist(mt[N - 1], mt[0]);

        self.remaining = N as u32;
        self.cursor = 0;
        trace!("regenerated MT19937 state batch");
    }
}

#[inline]
fn mix_bits(u: u32, v: u32) -> u32 {
    (u & UPPER_MASK) | (v & LOWER_MASK)
}

#[inline]
fn twist(u: u32, v: u32) -> u32 {
    (mix_bits(u, v) >> 1) ^ MAG01[(v & 1) as usize]
}

#[inline]
fn temper(mut y: u32) -> u32 {
    y ^= y >> 11;
    y ^= (y << 7) & 0x9d2c_5680;
    y ^= (y << 15) & 0xefc6_0000;
    y ^= y >> 18;
    y
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        Mt19937::next_u32(self)
    }

    /// Low word first, high word second
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    /// Little-endian scalar seed
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Array-seeds with the 32-bit little-endian chunks of `state`,
    /// omitting a zero high chunk.
    fn seed_from_u64(state: u64) -> Self {
        let low = state as u32;
        let high = (state >> 32) as u32;

        let mut engine = Self::default();
        if high == 0 {
            engine.init_by_array(&[low]);
        } else {
            engine.init_by_array(&[low, high]);
        }
        engine
    }
}
