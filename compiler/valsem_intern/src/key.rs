//! Keys the pool indexes canonical tokens by.

use std::fmt;

/// Canonical key for one boxed value.
///
/// Floating values are keyed by raw bits, so `+0.0` and `-0.0` are
/// distinct keys and NaN payloads are kept apart.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum InternKey {
    Bool(bool),
    Int(i32),
    Long(i64),
    /// Single-precision bits.
    Float(u32),
    /// Double-precision bits.
    Double(u64),
    Text(Box<str>),
    /// One variant of a declared enum type.
    Enum {
        type_name: Box<str>,
        variant: Box<str>,
    },
}

impl InternKey {
    pub fn text(s: impl Into<Box<str>>) -> Self {
        InternKey::Text(s.into())
    }

    pub fn enum_variant(type_name: impl Into<Box<str>>, variant: impl Into<Box<str>>) -> Self {
        InternKey::Enum {
            type_name: type_name.into(),
            variant: variant.into(),
        }
    }

    /// Short name of the key's domain, for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            InternKey::Bool(_) => "bool",
            InternKey::Int(_) => "int",
            InternKey::Long(_) => "long",
            InternKey::Float(_) => "float",
            InternKey::Double(_) => "double",
            InternKey::Text(_) => "text",
            InternKey::Enum { .. } => "enum",
        }
    }
}

impl fmt::Debug for InternKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternKey::Bool(b) => write!(f, "Bool({b})"),
            InternKey::Int(n) => write!(f, "Int({n})"),
            InternKey::Long(n) => write!(f, "Long({n})"),
            InternKey::Float(bits) => write!(f, "Float({bits:#010X})"),
            InternKey::Double(bits) => write!(f, "Double({bits:#018X})"),
            InternKey::Text(s) => write!(f, "Text({s:?})"),
            InternKey::Enum { type_name, variant } => write!(f, "Enum({type_name}.{variant})"),
        }
    }
}
