//! Pool population settings.

use std::ops::RangeInclusive;

/// Bounds of the small-integer cache.
///
/// The lower bound is fixed at −128. The upper bound of the `Int` cache
/// can be raised but never lowered below 127. `Long` always uses
/// −128..=127.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    int_cache_high: i32,
}

impl PoolConfig {
    pub const INT_CACHE_LOW: i32 = -128;
    pub const DEFAULT_INT_CACHE_HIGH: i32 = 127;
    pub const LONG_CACHE: RangeInclusive<i64> = -128..=127;

    /// Config with a raised `Int` cache ceiling. Values below 127 are
    /// clamped to 127.
    pub fn with_int_cache_high(high: i32) -> Self {
        PoolConfig {
            int_cache_high: high.max(Self::DEFAULT_INT_CACHE_HIGH),
        }
    }

    pub fn int_cache_high(&self) -> i32 {
        self.int_cache_high
    }

    pub fn int_cache(&self) -> RangeInclusive<i32> {
        Self::INT_CACHE_LOW..=self.int_cache_high
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            int_cache_high: Self::DEFAULT_INT_CACHE_HIGH,
        }
    }
}
