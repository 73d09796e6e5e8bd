//! Identity tokens and the canonical-instance pool.
//!
//! Every boxed value carries an [`IdentityToken`]. Two boxed values are
//! *identical* exactly when their tokens match. The [`InternPool`] decides,
//! per construction, whether a caller receives the canonical token for a
//! key or a brand new one.
//!
//! # Cacheable Domains
//!
//! | Key                   | `AutoIntern`                     | `ForceFresh` |
//! |-----------------------|----------------------------------|--------------|
//! | `Bool`                | canonical                        | fresh        |
//! | `Int` in cache range  | canonical                        | fresh        |
//! | `Long` in −128..=127  | canonical                        | fresh        |
//! | `Text`                | canonical (pooled on first use)  | fresh        |
//! | `Enum`                | canonical                        | canonical    |
//! | anything else         | fresh                            | fresh        |
//!
//! [`InternPool::canonical`] interns any key explicitly, regardless of
//! range, and is idempotent.

mod config;
mod key;
mod pool;
mod token;

pub use config::PoolConfig;
pub use key::InternKey;
pub use pool::{InternPolicy, InternPool, SharedPool};
pub use token::IdentityToken;
