#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_raw_bits_of_signed_zero() {
    assert_eq!(to_bits64(0.0), 0);
    assert_eq!(to_bits64(-0.0), 0x8000_0000_0000_0000);
    assert_eq!(to_bits32(-0.0), 0x8000_0000);
}

#[test]
fn test_nan_payload_untouched() {
    let quiet_with_payload = 0x7FF8_0000_0000_BEEF_u64;
    assert_eq!(to_bits64(from_bits64(quiet_with_payload)), quiet_with_payload);

    let single = 0x7FC0_1234_u32;
    assert_eq!(to_bits32(from_bits32(single)), single);
}

#[test]
fn test_narrow_loses_low_bit_above_2_pow_24() {
    let d: f64 = "16777217.0".parse().unwrap();
    let f = narrow(d);

    assert_eq!(to_bits32(f), 0x4B80_0000);
    assert_eq!(f, 16_777_216.0);
    assert!(widen(f) != d);
    assert!(!is_exact_in_single(d));
}

#[test]
fn test_round_trip_exact_values() {
    for d in [0.5, 1.0, -2.25, 16_777_216.0, 0.0, -0.0] {
        assert!(is_exact_in_single(d), "{d} should be exact");
        assert_eq!(to_bits64(widen(narrow(d))), to_bits64(d));
    }
}

#[test]
fn test_round_trip_inexact_values() {
    for d in [0.1, 0.2, 1.0 / 3.0] {
        assert!(!is_exact_in_single(d), "{d} should lose precision");
        assert!(widen(narrow(d)) != d);
    }
}

#[test]
fn test_narrow_saturates_to_infinity() {
    assert_eq!(narrow(1e300), f32::INFINITY);
    assert_eq!(narrow(-1e300), f32::NEG_INFINITY);
    assert_eq!(narrow(f64::INFINITY), f32::INFINITY);
    assert!(is_exact_in_single(f64::NEG_INFINITY));
    assert!(!is_exact_in_single(f64::MAX));
}

#[test]
fn test_narrow_nan_stays_nan() {
    assert!(narrow(f64::NAN).is_nan());
    assert!(narrow(from_bits64(0xFFF0_0000_0000_0001)).is_nan());
    assert!(!is_exact_in_single(f64::NAN));
}

#[test]
fn test_single_subnormal_widens_exactly() {
    let smallest = from_bits32(1);
    assert_eq!(Decomposed32::of(smallest).category(), FpCategory::Subnormal);
    assert_eq!(to_bits32(narrow(widen(smallest))), 1);
}

#[test]
fn test_double_subnormal_underflows_in_single() {
    let tiny = from_bits64(1);
    assert_eq!(Decomposed64::of(tiny).category(), FpCategory::Subnormal);
    assert_eq!(narrow(tiny), 0.0);
}

#[test]
fn test_decompose_one() {
    let one = Decomposed64::of(1.0);
    assert_eq!(
        one,
        Decomposed64 {
            negative: false,
            exponent: 1023,
            mantissa: 0,
        }
    );
    assert_eq!(one.category(), FpCategory::Normal);
}

#[test]
fn test_decompose_single_2_pow_24() {
    let d = Decomposed32::of(16_777_216.0);
    assert_eq!(
        d,
        Decomposed32 {
            negative: false,
            exponent: 127 + 24,
            mantissa: 0,
        }
    );
}

#[test]
fn test_decompose_special_categories() {
    assert_eq!(Decomposed64::of(-0.0).category(), FpCategory::Zero);
    assert!(Decomposed64::of(-0.0).negative);
    assert_eq!(Decomposed64::of(f64::INFINITY).category(), FpCategory::Infinite);
    assert_eq!(Decomposed64::of(f64::NAN).category(), FpCategory::Nan);
    assert_eq!(Decomposed32::of(f32::NEG_INFINITY).category(), FpCategory::Infinite);
    assert_eq!(Decomposed32::of(f32::NAN).category(), FpCategory::Nan);
}

proptest! {
    #[test]
    fn prop_every_single_is_exact_as_double(bits in any::<u32>()) {
        let f = from_bits32(bits);
        prop_assume!(!f.is_nan());
        prop_assert!(is_exact_in_single(widen(f)));
        prop_assert_eq!(to_bits32(narrow(widen(f))), bits);
    }

    #[test]
    fn prop_decomposed64_reassembles(bits in any::<u64>()) {
        prop_assert_eq!(Decomposed64::from_bits(bits).to_bits(), bits);
        prop_assert_eq!(Decomposed64::from_bits(bits).category(), from_bits64(bits).classify());
    }

    #[test]
    fn prop_decomposed32_reassembles(bits in any::<u32>()) {
        prop_assert_eq!(Decomposed32::from_bits(bits).to_bits(), bits);
        prop_assert_eq!(Decomposed32::from_bits(bits).category(), from_bits32(bits).classify());
    }
}
