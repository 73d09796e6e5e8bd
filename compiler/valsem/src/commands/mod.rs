//! Subcommands of the `valsem` binary.

mod bits;
mod probes;

pub use bits::{run_bits, BitsReport};
pub use probes::{render_reports, run_probes};
