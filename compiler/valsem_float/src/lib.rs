//! Floating-point representation and comparison rules.
//!
//! Two layers live here and are deliberately kept apart:
//!
//! - [`bits`]: exact raw bit patterns, narrowing (`f64 → f32`) and
//!   widening (`f32 → f64`).
//! - [`compare`]: primitive IEEE-754 comparison (`NaN != NaN`,
//!   `+0.0 == -0.0`) next to boxed structural comparison
//!   (`NaN == NaN`, `+0.0 != -0.0`).
//!
//! # Example
//!
//! ```text
//! let d = 16_777_217.0_f64;
//! let f = narrow(d);              // rounds to 16_777_216.0
//! assert_eq!(to_bits32(f), 0x4B80_0000);
//! assert!(!value_equals(d, widen(f)));
//! ```

pub mod bits;
pub mod compare;

pub use bits::{
    from_bits32, from_bits64, is_exact_in_single, narrow, to_bits32, to_bits64, widen,
    Decomposed32, Decomposed64,
};
pub use compare::{
    boxed_cmp, boxed_equals, greater_than, less_than, mixed_value_equals, order, value_equals,
    FloatOrdering, IeeeFloat,
};
