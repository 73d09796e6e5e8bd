//! Opaque allocation identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Next token to hand out. Process-wide so tokens from different pools
/// never collide.
static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Identity of one allocation.
///
/// Tokens are unique per allocation for the life of the process. Equality
/// of tokens is identity equality; it says nothing about the value.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct IdentityToken(u64);

impl IdentityToken {
    /// Allocate a token no other caller has seen.
    #[inline]
    pub(crate) fn allocate() -> Self {
        // Relaxed is enough: only uniqueness matters, not ordering.
        IdentityToken(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentityToken(#{})", self.0)
    }
}

impl fmt::Display for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{:x}", self.0)
    }
}
