//! Error types for boxed-value comparison and construction.

use crate::Primitive;

/// Errors raised by boxed-value operations.
///
/// All variants are local and recoverable. Narrowing and hash
/// invalidation are not errors and have no variant here.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// The operands have incompatible primitive types.
    #[error("type mismatch: cannot compare `{left}` with `{right}`")]
    TypeMismatch { left: String, right: String },

    #[error("no enum constant {type_name}.{name}")]
    UnknownVariant { type_name: String, name: String },
}

impl ValueError {
    pub fn type_mismatch(left: &Primitive, right: &Primitive) -> Self {
        ValueError::TypeMismatch {
            left: left.type_name().into_owned(),
            right: right.type_name().into_owned(),
        }
    }
}
