//! Primitive and boxed comparison semantics for floating values.
//!
//! # Two Equality Layers
//!
//! | Operands        | `value_equals` (primitive) | `boxed_equals` (structural) |
//! |-----------------|----------------------------|-----------------------------|
//! | `NaN`, `NaN`    | `false`                    | `true`                      |
//! | `+0.0`, `-0.0`  | `true`                     | `false`                     |
//!
//! The primitive layer is plain IEEE-754. The boxed layer compares
//! canonical bit patterns: every NaN collapses to one canonical NaN, and
//! the sign of zero is significant. `boxed_cmp` is the total order that
//! agrees with `boxed_equals`.

use std::cmp::Ordering;

use crate::bits::widen;

/// Outcome of an IEEE-754 comparison.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FloatOrdering {
    Less,
    Equal,
    Greater,
    /// At least one operand is NaN.
    Unordered,
}

impl FloatOrdering {
    /// Convert to a total `Ordering`, if ordered.
    pub fn ordering(self) -> Option<Ordering> {
        match self {
            FloatOrdering::Less => Some(Ordering::Less),
            FloatOrdering::Equal => Some(Ordering::Equal),
            FloatOrdering::Greater => Some(Ordering::Greater),
            FloatOrdering::Unordered => None,
        }
    }
}

impl From<Option<Ordering>> for FloatOrdering {
    fn from(ord: Option<Ordering>) -> Self {
        match ord {
            Some(Ordering::Less) => FloatOrdering::Less,
            Some(Ordering::Equal) => FloatOrdering::Equal,
            Some(Ordering::Greater) => FloatOrdering::Greater,
            None => FloatOrdering::Unordered,
        }
    }
}

/// Floating types the comparator understands.
///
/// Implemented for `f32` and `f64`. `canonical_key` maps a value to a
/// signed integer whose natural order is the boxed total order.
pub trait IeeeFloat: Copy + PartialOrd {
    fn is_nan(self) -> bool;

    /// Raw bits with every NaN replaced by the canonical quiet NaN,
    /// reinterpreted as a signed integer of the same width.
    fn canonical_key(self) -> i64;
}

impl IeeeFloat for f64 {
    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    #[inline]
    #[expect(
        clippy::cast_possible_wrap,
        reason = "reinterpreting bits as signed is intended"
    )]
    fn canonical_key(self) -> i64 {
        let bits = if f64::is_nan(self) {
            f64::NAN.to_bits()
        } else {
            self.to_bits()
        };
        bits as i64
    }
}

impl IeeeFloat for f32 {
    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }

    #[inline]
    #[expect(
        clippy::cast_possible_wrap,
        reason = "reinterpreting bits as signed is intended"
    )]
    fn canonical_key(self) -> i64 {
        let bits = if f32::is_nan(self) {
            f32::NAN.to_bits()
        } else {
            self.to_bits()
        };
        i64::from(bits as i32)
    }
}

/// Primitive IEEE equality. `false` if either side is NaN.
#[inline]
pub fn value_equals<F: IeeeFloat>(a: F, b: F) -> bool {
    a == b
}

/// Primitive IEEE ordering.
#[inline]
pub fn order<F: IeeeFloat>(a: F, b: F) -> FloatOrdering {
    a.partial_cmp(&b).into()
}

#[inline]
pub fn less_than<F: IeeeFloat>(a: F, b: F) -> bool {
    order(a, b) == FloatOrdering::Less
}

#[inline]
pub fn greater_than<F: IeeeFloat>(a: F, b: F) -> bool {
    order(a, b) == FloatOrdering::Greater
}

/// Structural equality of two boxed floating values.
///
/// `NaN` equals `NaN`; `+0.0` does not equal `-0.0`.
#[inline]
pub fn boxed_equals<F: IeeeFloat>(a: F, b: F) -> bool {
    a.canonical_key() == b.canonical_key()
}

/// Total order of boxed floating values.
///
/// Numerically ordered values keep their order. Ties and NaN are broken
/// by canonical bits, which puts `-0.0` below `+0.0` and NaN above
/// `+∞`.
pub fn boxed_cmp<F: IeeeFloat>(a: F, b: F) -> Ordering {
    match order(a, b) {
        FloatOrdering::Less => Ordering::Less,
        FloatOrdering::Greater => Ordering::Greater,
        FloatOrdering::Equal | FloatOrdering::Unordered => {
            a.canonical_key().cmp(&b.canonical_key())
        }
    }
}

/// Primitive equality of a double against a single.
///
/// The single is widened first, so the result reflects whether `f` is the
/// nearest single to `d` *and* `d` is exactly representable.
#[inline]
pub fn mixed_value_equals(d: f64, f: f32) -> bool {
    value_equals(d, widen(f))
}

#[cfg(test)]
mod tests;
