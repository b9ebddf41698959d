//! Variate conversions on top of raw 32-bit draws
//!
//! Every mapping here is a pure function of one or two raw engine words.
//! The scale constants are written out in full: folding them into
//! "simpler" expressions changes the least-significant bits of the result.

use std::fmt;
use std::str::FromStr;

use super::error::RngError;
use super::mt19937::Mt19937;

/// 1 / (2^32 - 1), maps a raw word onto [0, 1]
const CLOSED_SCALE: f64 = 1.0 / 4_294_967_295.0;

/// 1 / 2^32, maps a raw word onto [0, 1)
const HALF_OPEN_SCALE: f64 = 1.0 / 4_294_967_296.0;

/// 1 / 2^53, maps a 53-bit integer onto [0, 1)
const RES53_SCALE: f64 = 1.0 / 9_007_199_254_740_992.0;

/// Non-negative 31-bit integer in [0, 0x7fffffff]
#[inline]
pub fn int31(raw: u32) -> i32 {
    (raw >> 1) as i32
}

/// Real number on the closed interval [0, 1]
#[inline]
pub fn real1(raw: u32) -> f64 {
    f64::from(raw) * CLOSED_SCALE
}

/// Real number on the half-open interval [0, 1)
#[inline]
pub fn real2(raw: u32) -> f64 {
    f64::from(raw) * HALF_OPEN_SCALE
}

/// Real number on the open interval (0, 1)
#[inline]
pub fn real3(raw: u32) -> f64 {
    (f64::from(raw) + 0.5) * HALF_OPEN_SCALE
}

/// Real number on [0, 1) with 53-bit resolution
///
/// `a` must be the earlier of the two draws. The top 27 bits of `a` and the
/// top 26 bits of `b` form the mantissa.
#[inline]
pub fn res53(a: u32, b: u32) -> f64 {
    let high = u64::from(a >> 5);
    let low = u64::from(b >> 6);
    ((high << 26) | low) as f64 * RES53_SCALE
}

/// Named output mapping, used where the variate is chosen at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variate {
    U32,
    Int31,
    Real1,
    Real2,
    Real3,
    Res53,
}

impl Variate {
    pub const ALL: [Variate; 6] = [
        Variate::U32,
        Variate::Int31,
        Variate::Real1,
        Variate::Real2,
        Variate::Real3,
        Variate::Res53,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Variate::U32 => "u32",
            Variate::Int31 => "int31",
            Variate::Real1 => "real1",
            Variate::Real2 => "real2",
            Variate::Real3 => "real3",
            Variate::Res53 => "res53",
        }
    }

    /// Number of raw words one sample consumes
    pub fn draws_per_sample(&self) -> usize {
        match self {
            Variate::Res53 => 2,
            _ => 1,
        }
    }

    /// Draw one value of this variate from `engine`
    pub fn sample(&self, engine: &mut Mt19937) -> VariateValue {
        match self {
            Variate::U32 => VariateValue::Word(engine.next_u32()),
            Variate::Int31 => VariateValue::Int(engine.next_u31()),
            Variate::Real1 => VariateValue::Real(engine.next_f64_closed()),
            Variate::Real2 => VariateValue::Real(engine.next_f64_half_open()),
            Variate::Real3 => VariateValue::Real(engine.next_f64_open()),
            Variate::Res53 => VariateValue::Real(engine.next_f64_res53()),
        }
    }
}

impl fmt::Display for Variate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variate {
    type Err = RngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variate::ALL
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                RngError::InvalidArgument(format!(
                    "Unknown variate '{}'. Supported: u32, int31, real1, real2, real3, res53",
                    s
                ))
            })
    }
}

/// One sampled value, tagged by its numeric kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VariateValue {
    Word(u32),
    Int(i32),
    Real(f64),
}

impl fmt::Display for VariateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariateValue::Word(w) => write!(f, "{}", w),
            VariateValue::Int(i) => write!(f, "{}", i),
            // Shortest form that parses back to the same f64
            VariateValue::Real(r) => write!(f, "{}", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int31_drops_low_bit() {
        assert_eq!(int31(0), 0);
        assert_eq!(int31(1), 0);
        assert_eq!(int31(u32::MAX), i32::MAX);
    }

    #[test]
    fn test_real_bounds_at_extremes() {
        assert_eq!(real1(0), 0.0);
        assert_eq!(real1(u32::MAX), 1.0);

        assert_eq!(real2(0), 0.0);
        assert!(real2(u32::MAX) < 1.0);

        assert!(real3(0) > 0.0);
        assert!(real3(u32::MAX) < 1.0);

        assert_eq!(res53(0, 0), 0.0);
        assert!(res53(u32::MAX, u32::MAX) < 1.0);
    }

    #[test]
    fn test_res53_uses_top_bits_of_each_word() {
        // Only the low 5 bits of `a` and low 6 bits of `b` are discarded
        assert_eq!(res53(0x1f, 0x3f), 0.0);
        assert_eq!(res53(0, 0x40), RES53_SCALE);
        assert_eq!(res53(0x20, 0), (1u64 << 26) as f64 * RES53_SCALE);
    }

    #[test]
    fn test_variate_from_str() {
        assert_eq!("real1".parse::<Variate>().unwrap(), Variate::Real1);
        assert_eq!(" RES53 ".parse::<Variate>().unwrap(), Variate::Res53);
        assert!(matches!(
            "gauss".parse::<Variate>(),
            Err(RngError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_draws_per_sample() {
        for variate in Variate::ALL {
            let mut engine = Mt19937::new(7);
            variate.sample(&mut engine);
            assert_eq!(
                engine.draws_since_regeneration(),
                variate.draws_per_sample(),
                "{} consumed an unexpected number of words",
                variate
            );
        }
    }
}
