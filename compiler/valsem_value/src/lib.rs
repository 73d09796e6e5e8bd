//! Boxed values: a primitive paired with an allocation identity.
//!
//! A [`BoxedValue`] answers two separate questions:
//!
//! - [`BoxedValue::identical_to`]: do both sides denote the same allocation?
//! - [`BoxedValue::value_equals`]: do both sides hold equivalent content?
//!
//! Neither implies the other. Whether two equal values share an identity
//! is decided by the [`InternPool`](valsem_intern::InternPool) at
//! construction time, under an explicit [`InternPolicy`].
//!
//! # Equality Layers
//!
//! Structural equality on boxed floats follows the boxed rule
//! (`NaN == NaN`, `+0.0 != -0.0`). Comparing after unboxing,
//! [`Primitive::primitive_equals`], follows IEEE-754 and binary numeric
//! promotion instead.

mod boxed;
mod enums;
mod errors;
mod primitive;

pub use boxed::BoxedValue;
pub use enums::EnumType;
pub use errors::ValueError;
pub use primitive::{EnumConstant, Primitive, PrimitiveKind};

pub use valsem_intern::{IdentityToken, InternPolicy, InternPool};
