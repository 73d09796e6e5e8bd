//! Immutable scalar values with no identity.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use valsem_float::{boxed_equals, IeeeFloat};
use valsem_intern::InternKey;

use crate::ValueError;

/// One constant of a declared enum type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumConstant {
    pub type_name: Arc<str>,
    pub variant: Arc<str>,
    pub ordinal: u32,
}

/// Primitive type tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Int,
    Long,
    Float,
    Double,
    Text,
    Enum,
}

/// Immutable scalar.
///
/// `PartialEq`/`Hash` implement the *structural* rule used by boxed
/// values: floats compare by canonical bits, so the impls stay consistent
/// with each other and `Eq` holds. IEEE comparison lives in
/// [`Primitive::primitive_equals`].
#[derive(Clone)]
pub enum Primitive {
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Text(Arc<str>),
    Enum(EnumConstant),
}

/// Numeric promotion rank, ordered from narrowest to widest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum NumericRank {
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    pub fn text(s: impl Into<Arc<str>>) -> Self {
        Primitive::Text(s.into())
    }

    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Bool(_) => PrimitiveKind::Bool,
            Primitive::Int(_) => PrimitiveKind::Int,
            Primitive::Long(_) => PrimitiveKind::Long,
            Primitive::Float(_) => PrimitiveKind::Float,
            Primitive::Double(_) => PrimitiveKind::Double,
            Primitive::Text(_) => PrimitiveKind::Text,
            Primitive::Enum(_) => PrimitiveKind::Enum,
        }
    }

    /// Name of this value's type. Enum constants report their enum type.
    pub fn type_name(&self) -> Cow<'static, str> {
        match self {
            Primitive::Bool(_) => Cow::Borrowed("bool"),
            Primitive::Int(_) => Cow::Borrowed("int"),
            Primitive::Long(_) => Cow::Borrowed("long"),
            Primitive::Float(_) => Cow::Borrowed("float"),
            Primitive::Double(_) => Cow::Borrowed("double"),
            Primitive::Text(_) => Cow::Borrowed("text"),
            Primitive::Enum(c) => Cow::Owned(c.type_name.to_string()),
        }
    }

    /// Whether both sides have the same type (enum types by name).
    pub fn same_type(&self, other: &Primitive) -> bool {
        match (self, other) {
            (Primitive::Enum(a), Primitive::Enum(b)) => a.type_name == b.type_name,
            _ => self.kind() == other.kind(),
        }
    }

    /// Pool key for this value.
    pub fn key(&self) -> InternKey {
        match self {
            Primitive::Bool(b) => InternKey::Bool(*b),
            Primitive::Int(n) => InternKey::Int(*n),
            Primitive::Long(n) => InternKey::Long(*n),
            Primitive::Float(f) => InternKey::Float(f.to_bits()),
            Primitive::Double(d) => InternKey::Double(d.to_bits()),
            Primitive::Text(s) => InternKey::text(&**s),
            Primitive::Enum(c) => InternKey::enum_variant(&*c.type_name, &*c.variant),
        }
    }

    /// Structural equality, `None` when the types differ.
    pub fn structural_equals(&self, other: &Primitive) -> Option<bool> {
        match (self, other) {
            (Primitive::Bool(a), Primitive::Bool(b)) => Some(a == b),
            (Primitive::Int(a), Primitive::Int(b)) => Some(a == b),
            (Primitive::Long(a), Primitive::Long(b)) => Some(a == b),
            (Primitive::Float(a), Primitive::Float(b)) => Some(boxed_equals(*a, *b)),
            (Primitive::Double(a), Primitive::Double(b)) => Some(boxed_equals(*a, *b)),
            (Primitive::Text(a), Primitive::Text(b)) => Some(a == b),
            (Primitive::Enum(a), Primitive::Enum(b)) if a.type_name == b.type_name => {
                Some(a.variant == b.variant)
            }
            _ => None,
        }
    }

    /// Primitive `==` after binary numeric promotion.
    ///
    /// `int → long → float → double`; floats compare under IEEE rules, so
    /// NaN is never equal and signed zeros are. Booleans, text and enum
    /// constants only compare with their own type.
    pub fn primitive_equals(&self, other: &Primitive) -> Result<bool, ValueError> {
        if let (Some(a), Some(b)) = (self.numeric_rank(), other.numeric_rank()) {
            let equal = match a.max(b) {
                NumericRank::Double => self.as_double() == other.as_double(),
                NumericRank::Float => self.as_float() == other.as_float(),
                NumericRank::Long | NumericRank::Int => self.as_long() == other.as_long(),
            };
            return Ok(equal);
        }
        match (self, other) {
            (Primitive::Bool(a), Primitive::Bool(b)) => Ok(a == b),
            (Primitive::Text(a), Primitive::Text(b)) => Ok(a == b),
            (Primitive::Enum(a), Primitive::Enum(b)) if a.type_name == b.type_name => {
                Ok(a.variant == b.variant)
            }
            _ => Err(ValueError::type_mismatch(self, other)),
        }
    }

    fn numeric_rank(&self) -> Option<NumericRank> {
        match self {
            Primitive::Int(_) => Some(NumericRank::Int),
            Primitive::Long(_) => Some(NumericRank::Long),
            Primitive::Float(_) => Some(NumericRank::Float),
            Primitive::Double(_) => Some(NumericRank::Double),
            _ => None,
        }
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "promotion to double rounds like the primitive conversion"
    )]
    fn as_double(&self) -> f64 {
        match self {
            Primitive::Int(n) => f64::from(*n),
            Primitive::Long(n) => *n as f64,
            Primitive::Float(f) => valsem_float::widen(*f),
            Primitive::Double(d) => *d,
            _ => f64::NAN,
        }
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "promotion to float rounds like the primitive conversion"
    )]
    fn as_float(&self) -> f32 {
        match self {
            Primitive::Int(n) => *n as f32,
            Primitive::Long(n) => *n as f32,
            Primitive::Float(f) => *f,
            Primitive::Double(d) => valsem_float::narrow(*d),
            _ => f32::NAN,
        }
    }

    fn as_long(&self) -> Option<i64> {
        match self {
            Primitive::Int(n) => Some(i64::from(*n)),
            Primitive::Long(n) => Some(*n),
            _ => None,
        }
    }
}

impl PartialEq for Primitive {
    fn eq(&self, other: &Self) -> bool {
        self.structural_equals(other).unwrap_or(false)
    }
}

impl Eq for Primitive {}

impl Hash for Primitive {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Primitive::Bool(b) => b.hash(state),
            Primitive::Int(n) => n.hash(state),
            Primitive::Long(n) => n.hash(state),
            Primitive::Float(f) => f.canonical_key().hash(state),
            Primitive::Double(d) => d.canonical_key().hash(state),
            Primitive::Text(s) => s.hash(state),
            Primitive::Enum(c) => {
                c.type_name.hash(state);
                c.variant.hash(state);
            }
        }
    }
}

impl fmt::Debug for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Bool(b) => write!(f, "Bool({b})"),
            Primitive::Int(n) => write!(f, "Int({n})"),
            Primitive::Long(n) => write!(f, "Long({n})"),
            Primitive::Float(x) => write!(f, "Float({x:?})"),
            Primitive::Double(x) => write!(f, "Double({x:?})"),
            Primitive::Text(s) => write!(f, "Text({s:?})"),
            Primitive::Enum(c) => write!(f, "Enum({}.{})", c.type_name, c.variant),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Bool(b) => write!(f, "{b}"),
            Primitive::Int(n) => write!(f, "{n}"),
            Primitive::Long(n) => write!(f, "{n}"),
            // Debug keeps the trailing `.0` on integral floats.
            Primitive::Float(x) => write!(f, "{x:?}"),
            Primitive::Double(x) => write!(f, "{x:?}"),
            Primitive::Text(s) => f.write_str(s),
            Primitive::Enum(c) => f.write_str(&c.variant),
        }
    }
}

impl From<bool> for Primitive {
    fn from(b: bool) -> Self {
        Primitive::Bool(b)
    }
}

impl From<i32> for Primitive {
    fn from(n: i32) -> Self {
        Primitive::Int(n)
    }
}

impl From<i64> for Primitive {
    fn from(n: i64) -> Self {
        Primitive::Long(n)
    }
}

impl From<f32> for Primitive {
    fn from(f: f32) -> Self {
        Primitive::Float(f)
    }
}

impl From<f64> for Primitive {
    fn from(d: f64) -> Self {
        Primitive::Double(d)
    }
}

impl From<&str> for Primitive {
    fn from(s: &str) -> Self {
        Primitive::text(s)
    }
}
