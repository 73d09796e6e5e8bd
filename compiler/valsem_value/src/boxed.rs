//! Identity-carrying wrapper around a primitive.

use std::fmt;

use valsem_intern::{IdentityToken, InternPolicy, InternPool};

use crate::{Primitive, ValueError};

/// A primitive plus the identity of the allocation holding it.
///
/// `Clone` copies the *reference*: the clone keeps the same token and is
/// identical to the original. Allocating a second instance goes through
/// [`BoxedValue::boxed`].
#[derive(Clone)]
pub struct BoxedValue {
    token: IdentityToken,
    value: Primitive,
}

impl BoxedValue {
    /// Box `value`, asking `pool` for its identity under `policy`.
    pub fn boxed(value: impl Into<Primitive>, policy: InternPolicy, pool: &InternPool) -> Self {
        let value = value.into();
        let token = pool.intern(&value.key(), policy);
        BoxedValue { token, value }
    }

    /// Box with `AutoIntern`, the way a literal or an implicit conversion
    /// would.
    pub fn auto(value: impl Into<Primitive>, pool: &InternPool) -> Self {
        Self::boxed(value, InternPolicy::AutoIntern, pool)
    }

    /// Box with `ForceFresh`, the way an explicit constructor call would.
    pub fn fresh(value: impl Into<Primitive>, pool: &InternPool) -> Self {
        Self::boxed(value, InternPolicy::ForceFresh, pool)
    }

    #[inline]
    pub fn token(&self) -> IdentityToken {
        self.token
    }

    #[inline]
    pub fn value(&self) -> &Primitive {
        &self.value
    }

    /// Identity comparison.
    ///
    /// Comparing boxes of different types is a type error, not `false`.
    pub fn identical_to(&self, other: &BoxedValue) -> Result<bool, ValueError> {
        if !self.value.same_type(&other.value) {
            return Err(ValueError::type_mismatch(&self.value, &other.value));
        }
        Ok(self.token == other.token)
    }

    /// Structural comparison. Boxes of different types are never equal.
    pub fn value_equals(&self, other: &BoxedValue) -> bool {
        self.value.structural_equals(&other.value).unwrap_or(false)
    }

    /// Structural comparison that reports mismatched types.
    pub fn try_value_equals(&self, other: &BoxedValue) -> Result<bool, ValueError> {
        self.value
            .structural_equals(&other.value)
            .ok_or_else(|| ValueError::type_mismatch(&self.value, &other.value))
    }

    /// Unbox, then compare as primitives (IEEE rules, numeric promotion).
    pub fn unboxed_equals(&self, other: &Primitive) -> Result<bool, ValueError> {
        self.value.primitive_equals(other)
    }

    /// The canonical instance for this value, pooling it if needed.
    pub fn intern(&self, pool: &InternPool) -> BoxedValue {
        BoxedValue {
            token: pool.canonical(&self.value.key()),
            value: self.value.clone(),
        }
    }

    /// Concatenate text. The receiver is immutable; the result is a new
    /// instance with its own identity.
    pub fn concat(&self, suffix: &str, pool: &InternPool) -> Result<BoxedValue, ValueError> {
        let Primitive::Text(s) = &self.value else {
            return Err(ValueError::type_mismatch(&self.value, &Primitive::from(suffix)));
        };
        let joined = format!("{s}{suffix}");
        Ok(Self::fresh(Primitive::text(joined), pool))
    }
}

impl fmt::Debug for BoxedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{}", self.value, self.token)
    }
}

impl fmt::Display for BoxedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
