//! Tests for the variate conversion layer
//!
//! Range laws, draw accounting, and agreement between the engine methods
//! and the pure conversion functions.

use mt19937_core_rs::rng::variates;
use mt19937_core_rs::{Mt19937, Variate, VariateValue};
use rand::Rng;
use rand_distr::{Distribution, Normal};

const DRAWS: usize = 20_000;

#[test]
fn test_real1_closed_interval() {
    let mut mt = Mt19937::new(12345);
    for _ in 0..DRAWS {
        let val = mt.next_f64_closed();
        assert!(
            (0.0..=1.0).contains(&val),
            "next_f64_closed() produced {} outside [0, 1]",
            val
        );
    }
}

#[test]
fn test_real2_half_open_interval() {
    let mut mt = Mt19937::new(12345);
    for _ in 0..DRAWS {
        let val = mt.next_f64_half_open();
        assert!(
            val >= 0.0 && val < 1.0,
            "next_f64_half_open() produced {} outside [0, 1)",
            val
        );
    }
}

#[test]
fn test_real3_open_interval() {
    let mut mt = Mt19937::new(12345);
    for _ in 0..DRAWS {
        let val = mt.next_f64_open();
        assert!(
            val > 0.0 && val < 1.0,
            "next_f64_open() produced {} outside (0, 1)",
            val
        );
    }
}

#[test]
fn test_res53_half_open_interval() {
    let mut mt = Mt19937::new(12345);
    for _ in 0..DRAWS {
        let val = mt.next_f64_res53();
        assert!(
            val >= 0.0 && val < 1.0,
            "next_f64_res53() produced {} outside [0, 1)",
            val
        );
    }
}

#[test]
fn test_int31_non_negative() {
    let mut mt = Mt19937::new(12345);
    for _ in 0..DRAWS {
        assert!(mt.next_u31() >= 0);
    }
}

#[test]
fn test_engine_methods_match_pure_conversions() {
    let mut engine = Mt19937::new(95273);
    let mut raw = Mt19937::new(95273);

    for _ in 0..1000 {
        assert_eq!(engine.next_u31(), variates::int31(raw.next_u32()));
        assert_eq!(engine.next_f64_closed(), variates::real1(raw.next_u32()));
        assert_eq!(engine.next_f64_half_open(), variates::real2(raw.next_u32()));
        assert_eq!(engine.next_f64_open(), variates::real3(raw.next_u32()));

        let a = raw.next_u32();
        let b = raw.next_u32();
        assert_eq!(engine.next_f64_res53(), variates::res53(a, b));
    }
}

#[test]
fn test_res53_draw_order() {
    let mut mt = Mt19937::new(95273);
    // a = first draw, b = second draw
    assert_eq!(mt.next_f64_res53(), 0.5892208671912124);
}

#[test]
fn test_real1_exact_scale() {
    let mut engine = Mt19937::new(5489);
    // 3499211612 / 4294967295
    let expected = 3499211612.0 * (1.0 / 4294967295.0);
    assert_eq!(engine.next_f64_closed(), expected);
}

#[test]
fn test_variate_sample_matches_methods() {
    for variate in Variate::ALL {
        let mut via_enum = Mt19937::new(4242);
        let mut direct = Mt19937::new(4242);

        for _ in 0..100 {
            let sampled = variate.sample(&mut via_enum);
            let expected = match variate {
                Variate::U32 => VariateValue::Word(direct.next_u32()),
                Variate::Int31 => VariateValue::Int(direct.next_u31()),
                Variate::Real1 => VariateValue::Real(direct.next_f64_closed()),
                Variate::Real2 => VariateValue::Real(direct.next_f64_half_open()),
                Variate::Real3 => VariateValue::Real(direct.next_f64_open()),
                Variate::Res53 => VariateValue::Real(direct.next_f64_res53()),
            };
            assert_eq!(sampled, expected, "{} diverged", variate);
        }
    }
}

#[test]
fn test_real2_mean_near_half() {
    let mut mt = Mt19937::new(2718);
    let sum: f64 = (0..DRAWS).map(|_| mt.next_f64_half_open()).sum();
    let mean = sum / DRAWS as f64;
    assert!(
        (mean - 0.5).abs() < 0.01,
        "Mean of {} uniform draws was {}",
        DRAWS,
        mean
    );
}

#[test]
fn test_rand_ecosystem_interop() {
    let mut mt = Mt19937::new(12345);

    for _ in 0..1000 {
        let roll: u32 = mt.gen_range(1..=6);
        assert!((1..=6).contains(&roll));
    }

    let normal = Normal::new(0.0, 1.0).unwrap();
    let sum: f64 = (0..DRAWS).map(|_| normal.sample(&mut mt)).sum();
    assert!((sum / DRAWS as f64).abs() < 0.05);
}

#[test]
fn test_fill_bytes_uses_little_endian_words() {
    use rand::RngCore;

    let mut bytes_engine = Mt19937::new(99);
    let mut word_engine = Mt19937::new(99);

    let mut buf = [0u8; 8];
    bytes_engine.fill_bytes(&mut buf);

    let mut expected = [0u8; 8];
    expected[..4].copy_from_slice(&word_engine.next_u32().to_le_bytes());
    expected[4..].copy_from_slice(&word_engine.next_u32().to_le_bytes());
    assert_eq!(buf, expected);
}
