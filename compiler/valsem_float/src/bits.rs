//! Raw IEEE-754 bit patterns and width conversions.
//!
//! Bit extraction never normalizes NaN payloads. Narrowing follows the
//! hardware conversion: round-to-nearest-even, saturating to ±infinity
//! outside the `f32` range. The payload of a narrowed NaN is
//! implementation-defined; only "is NaN" is guaranteed.

use std::num::FpCategory;

/// Raw bit pattern of a double.
#[inline]
pub fn to_bits64(d: f64) -> u64 {
    d.to_bits()
}

/// Raw bit pattern of a single.
#[inline]
pub fn to_bits32(f: f32) -> u32 {
    f.to_bits()
}

#[inline]
pub fn from_bits64(bits: u64) -> f64 {
    f64::from_bits(bits)
}

#[inline]
pub fn from_bits32(bits: u32) -> f32 {
    f32::from_bits(bits)
}

/// Narrow a double to single precision (round-to-nearest-even).
///
/// Values beyond `f32::MAX` become ±infinity. This is never an error.
#[inline]
#[expect(
    clippy::cast_possible_truncation,
    reason = "narrowing is the point of this function"
)]
pub fn narrow(d: f64) -> f32 {
    d as f32
}

/// Widen a single to double precision. Always exact.
#[inline]
pub fn widen(f: f32) -> f64 {
    f64::from(f)
}

/// Whether `d` survives a narrow/widen round trip bit-for-bit.
///
/// NaN is never considered exact, since its narrowed payload is not
/// specified.
pub fn is_exact_in_single(d: f64) -> bool {
    !d.is_nan() && to_bits64(widen(narrow(d))) == to_bits64(d)
}

/// Sign / biased exponent / mantissa split of a double.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Decomposed64 {
    pub negative: bool,
    /// Biased exponent (11 bits).
    pub exponent: u16,
    /// Fraction field (52 bits), without the implicit leading one.
    pub mantissa: u64,
}

impl Decomposed64 {
    pub const EXPONENT_BITS: u32 = 11;
    pub const MANTISSA_BITS: u32 = 52;
    const EXPONENT_MASK: u64 = (1 << Self::EXPONENT_BITS) - 1;
    const MANTISSA_MASK: u64 = (1 << Self::MANTISSA_BITS) - 1;

    #[allow(
        clippy::cast_possible_truncation,
        reason = "exponent is masked to 11 bits"
    )]
    pub const fn from_bits(bits: u64) -> Self {
        Decomposed64 {
            negative: bits >> 63 == 1,
            exponent: ((bits >> Self::MANTISSA_BITS) & Self::EXPONENT_MASK) as u16,
            mantissa: bits & Self::MANTISSA_MASK,
        }
    }

    pub fn of(d: f64) -> Self {
        Self::from_bits(to_bits64(d))
    }

    pub const fn to_bits(self) -> u64 {
        ((self.negative as u64) << 63)
            | ((self.exponent as u64) << Self::MANTISSA_BITS)
            | self.mantissa
    }

    /// Classify from the fields alone.
    pub const fn category(self) -> FpCategory {
        classify(self.exponent as u64, Self::EXPONENT_MASK, self.mantissa)
    }
}

/// Sign / biased exponent / mantissa split of a single.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Decomposed32 {
    pub negative: bool,
    /// Biased exponent (8 bits).
    pub exponent: u8,
    /// Fraction field (23 bits).
    pub mantissa: u32,
}

impl Decomposed32 {
    pub const EXPONENT_BITS: u32 = 8;
    pub const MANTISSA_BITS: u32 = 23;
    const EXPONENT_MASK: u32 = (1 << Self::EXPONENT_BITS) - 1;
    const MANTISSA_MASK: u32 = (1 << Self::MANTISSA_BITS) - 1;

    #[allow(
        clippy::cast_possible_truncation,
        reason = "exponent is masked to 8 bits"
    )]
    pub const fn from_bits(bits: u32) -> Self {
        Decomposed32 {
            negative: bits >> 31 == 1,
            exponent: ((bits >> Self::MANTISSA_BITS) & Self::EXPONENT_MASK) as u8,
            mantissa: bits & Self::MANTISSA_MASK,
        }
    }

    pub fn of(f: f32) -> Self {
        Self::from_bits(to_bits32(f))
    }

    pub const fn to_bits(self) -> u32 {
        ((self.negative as u32) << 31)
            | ((self.exponent as u32) << Self::MANTISSA_BITS)
            | self.mantissa
    }

    pub const fn category(self) -> FpCategory {
        classify(
            self.exponent as u64,
            Self::EXPONENT_MASK as u64,
            self.mantissa as u64,
        )
    }
}

const fn classify(exponent: u64, all_ones: u64, mantissa: u64) -> FpCategory {
    if exponent == 0 {
        if mantissa == 0 {
            FpCategory::Zero
        } else {
            FpCategory::Subnormal
        }
    } else if exponent == all_ones {
        if mantissa == 0 {
            FpCategory::Infinite
        } else {
            FpCategory::Nan
        }
    } else {
        FpCategory::Normal
    }
}

#[cfg(test)]
mod tests;
