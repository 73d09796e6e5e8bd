//! Declared enum types and their singleton constants.

use std::sync::Arc;

use valsem_intern::{InternPolicy, InternPool};

use crate::{BoxedValue, EnumConstant, Primitive, ValueError};

/// An enum type whose variants are boxed singletons.
///
/// Every way of obtaining a variant (declaration order, `value_of`, or
/// boxing the constant again against the same pool) yields the same
/// identity.
#[derive(Debug)]
pub struct EnumType {
    name: Arc<str>,
    constants: Vec<BoxedValue>,
}

impl EnumType {
    pub fn declare(name: &str, variants: &[&str], pool: &InternPool) -> Self {
        let name: Arc<str> = Arc::from(name);
        let constants = variants
            .iter()
            .zip(0_u32..)
            .map(|(variant, ordinal)| {
                let constant = EnumConstant {
                    type_name: Arc::clone(&name),
                    variant: Arc::from(*variant),
                    ordinal,
                };
                BoxedValue::boxed(Primitive::Enum(constant), InternPolicy::AutoIntern, pool)
            })
            .collect();
        EnumType { name, constants }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Constants in declaration order.
    pub fn values(&self) -> &[BoxedValue] {
        &self.constants
    }

    pub fn variant(&self, ordinal: usize) -> Option<&BoxedValue> {
        self.constants.get(ordinal)
    }

    /// Resolve a constant by name.
    pub fn value_of(&self, name: &str) -> Result<BoxedValue, ValueError> {
        self.constants
            .iter()
            .find(|c| matches!(c.value(), Primitive::Enum(e) if &*e.variant == name))
            .cloned()
            .ok_or_else(|| ValueError::UnknownVariant {
                type_name: self.name.to_string(),
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Tests can panic")]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_of_returns_singleton() {
        let pool = InternPool::new();
        let quiz = EnumType::declare("EnumQuiz", &["FOO", "BAR"], &pool);

        let a = quiz.variant(0).unwrap().clone();
        let c = quiz.value_of("FOO").unwrap();

        assert!(a.identical_to(&c).unwrap());
        assert!(a.value_equals(&c));
        assert!(c.value_equals(&a));
    }

    #[test]
    fn test_redeclared_type_shares_identity() {
        let pool = InternPool::new();
        let first = EnumType::declare("EnumQuiz", &["FOO", "BAR"], &pool);
        let second = EnumType::declare("EnumQuiz", &["FOO", "BAR"], &pool);
        let foo = first.value_of("FOO").unwrap();
        assert!(foo.identical_to(&second.value_of("FOO").unwrap()).unwrap());
    }

    #[test]
    fn test_distinct_variants() {
        let pool = InternPool::new();
        let quiz = EnumType::declare("EnumQuiz", &["FOO", "BAR"], &pool);
        let foo = quiz.value_of("FOO").unwrap();
        let bar = quiz.value_of("BAR").unwrap();
        assert!(!foo.identical_to(&bar).unwrap());
        assert!(!foo.value_equals(&bar));
    }

    #[test]
    fn test_unknown_variant() {
        let pool = InternPool::new();
        let quiz = EnumType::declare("EnumQuiz", &["FOO"], &pool);
        assert_eq!(
            quiz.value_of("BAZ").unwrap_err(),
            ValueError::UnknownVariant {
                type_name: "EnumQuiz".to_string(),
                name: "BAZ".to_string(),
            }
        );
        assert_eq!(quiz.name(), "EnumQuiz");
        assert_eq!(quiz.values().len(), 1);
    }

    #[test]
    fn test_identity_across_enum_types_is_type_error() {
        let pool = InternPool::new();
        let a = EnumType::declare("A", &["X"], &pool);
        let b = EnumType::declare("B", &["X"], &pool);
        let ax = a.value_of("X").unwrap();
        let bx = b.value_of("X").unwrap();
        assert!(ax.identical_to(&bx).is_err());
        assert!(!ax.value_equals(&bx));
    }
}
