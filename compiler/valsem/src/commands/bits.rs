//! `valsem bits <number>`: single/double bit patterns of a number.

use std::fmt;

use valsem_float::{narrow, to_bits32, to_bits64, value_equals, widen, Decomposed32, Decomposed64};

use crate::CliError;

/// A double, its single-precision narrowing, and that narrowing widened back.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BitsReport {
    pub double: f64,
    pub single: f32,
    pub widened: f64,
}

impl BitsReport {
    pub fn of(double: f64) -> Self {
        let single = narrow(double);
        BitsReport {
            double,
            single,
            widened: widen(single),
        }
    }

    /// Whether the double survives the round trip through single precision.
    pub fn round_trips(&self) -> bool {
        value_equals(self.double, self.widened)
    }
}

impl fmt::Display for BitsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = Decomposed64::of(self.double);
        let s = Decomposed32::of(self.single);
        let fd = Decomposed64::of(self.widened);
        writeln!(
            f,
            "d  = {:<24?} {:016X}  sign={} exp={:#05x} mantissa={:#015x}",
            self.double,
            to_bits64(self.double),
            u8::from(d.negative),
            d.exponent,
            d.mantissa
        )?;
        writeln!(
            f,
            "f  = {:<24?} {:08X}          sign={} exp={:#04x}  mantissa={:#08x}",
            self.single,
            to_bits32(self.single),
            u8::from(s.negative),
            s.exponent,
            s.mantissa
        )?;
        writeln!(
            f,
            "fd = {:<24?} {:016X}  sign={} exp={:#05x} mantissa={:#015x}",
            self.widened,
            to_bits64(self.widened),
            u8::from(fd.negative),
            fd.exponent,
            fd.mantissa
        )?;
        write!(f, "b  = {}", self.round_trips())
    }
}

pub fn run_bits(input: &str) -> Result<BitsReport, CliError> {
    let double = input
        .trim()
        .parse::<f64>()
        .map_err(|source| CliError::Parse {
            input: input.to_string(),
            source,
        })?;
    tracing::debug!(double, "computing bit patterns");
    Ok(BitsReport::of(double))
}
