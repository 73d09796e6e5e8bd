use super::*;
use crate::bits::{from_bits64, narrow};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_nan_is_not_value_equal_to_itself() {
    assert!(!value_equals(f64::NAN, f64::NAN));
    assert!(!value_equals(f32::NAN, f32::NAN));
}

#[test]
fn test_signed_zero_value_equal() {
    assert!(value_equals(0.0_f64, -0.0));
    assert!(value_equals(-0.0_f32, 0.0));
}

#[test]
fn test_order_with_nan_is_unordered() {
    assert_eq!(order(f64::NAN, 0.0), FloatOrdering::Unordered);
    assert_eq!(order(0.0, f64::NAN), FloatOrdering::Unordered);
    assert_eq!(order(f64::NAN, f64::NAN), FloatOrdering::Unordered);
    assert!(!less_than(f64::NAN, 0.0));
    assert!(!greater_than(f64::NAN, 0.0));
    assert!(!less_than(0.0, f64::NAN));
    assert!(!greater_than(0.0, f64::NAN));
}

#[test]
fn test_order_ordered_values() {
    assert_eq!(order(1.0, 2.0), FloatOrdering::Less);
    assert_eq!(order(2.0_f32, 1.0), FloatOrdering::Greater);
    assert_eq!(order(-0.0, 0.0), FloatOrdering::Equal);
    assert_eq!(order(1.0, 2.0).ordering(), Some(Ordering::Less));
    assert_eq!(FloatOrdering::Unordered.ordering(), None);
}

#[test]
fn test_boxed_nan_equals_nan() {
    assert!(boxed_equals(f64::NAN, f64::NAN));
    assert!(boxed_equals(f32::NAN, f32::NAN));
    // The primitive layer disagrees on the same operands.
    assert!(!value_equals(f64::NAN, f64::NAN));
}

#[test]
fn test_boxed_nan_payloads_collapse() {
    let signalling = from_bits64(0x7FF0_0000_0000_0001);
    let negative_quiet = from_bits64(0xFFF8_0000_0000_0000);
    assert!(boxed_equals(signalling, f64::NAN));
    assert!(boxed_equals(negative_quiet, signalling));
}

#[test]
fn test_boxed_signed_zero_unequal() {
    assert!(!boxed_equals(0.0_f64, -0.0));
    assert!(!boxed_equals(0.0_f32, -0.0));
    assert!(boxed_equals(-0.0_f64, -0.0));
}

#[test]
fn test_boxed_cmp_total_order() {
    assert_eq!(boxed_cmp(0.0, f64::NAN), Ordering::Less);
    assert_eq!(boxed_cmp(f64::INFINITY, f64::NAN), Ordering::Less);
    assert_eq!(boxed_cmp(f64::NAN, f64::NAN), Ordering::Equal);
    assert_eq!(boxed_cmp(-0.0, 0.0), Ordering::Less);
    assert_eq!(boxed_cmp(0.0, -0.0), Ordering::Greater);
    assert_eq!(boxed_cmp(-1.0, -0.0), Ordering::Less);
    assert_eq!(boxed_cmp(-2.0_f32, -1.0), Ordering::Less);
    assert_eq!(boxed_cmp(f32::NAN, f32::INFINITY), Ordering::Greater);
}

#[test]
fn test_boxed_cmp_sorts_like_a_total_order() {
    let mut values = vec![f64::NAN, 1.0, -0.0, f64::NEG_INFINITY, 0.0, -3.5];
    values.sort_by(|a, b| boxed_cmp(*a, *b));

    let bits: Vec<u64> = values.iter().map(|v| v.to_bits()).collect();
    let expected: Vec<u64> = [f64::NEG_INFINITY, -3.5, -0.0, 0.0, 1.0, f64::NAN]
        .iter()
        .map(|v| v.to_bits())
        .collect();
    assert_eq!(bits, expected);
}

#[test]
fn test_mixed_width_equality() {
    assert!(!mixed_value_equals(0.2, 0.2_f32));
    assert!(mixed_value_equals(0.5, 0.5_f32));
    assert!(mixed_value_equals(0.0, 0.0_f32));
    assert!(mixed_value_equals(0.0, -0.0_f32));
    assert!(!mixed_value_equals(f64::NAN, f32::NAN));
}

#[test]
fn test_accumulated_sums_diverge_by_width() {
    let single = 0.2_f32 + 0.2 + 0.2;
    let double = 0.2_f64 + 0.2 + 0.2;
    assert!(!value_equals(double, 0.6));
    assert!(!mixed_value_equals(double, single));
}

#[test]
fn test_narrowed_value_differs_from_original() {
    let d = 0.1_f64;
    assert!(!mixed_value_equals(d, narrow(d)));
}

proptest! {
    #[test]
    fn prop_boxed_equals_is_reflexive(bits in any::<u64>()) {
        let d = from_bits64(bits);
        prop_assert!(boxed_equals(d, d));
        prop_assert_eq!(boxed_cmp(d, d), Ordering::Equal);
    }

    #[test]
    fn prop_layers_agree_off_nan_and_zero(a in any::<f64>(), b in any::<f64>()) {
        prop_assume!(!a.is_nan() && !b.is_nan());
        prop_assume!(a != 0.0 || b != 0.0);
        prop_assert_eq!(value_equals(a, b), boxed_equals(a, b));
    }

    #[test]
    fn prop_boxed_cmp_is_antisymmetric(a in any::<f64>(), b in any::<f64>()) {
        prop_assert_eq!(boxed_cmp(a, b), boxed_cmp(b, a).reverse());
        prop_assert_eq!(boxed_cmp(a, b) == Ordering::Equal, boxed_equals(a, b));
    }
}
