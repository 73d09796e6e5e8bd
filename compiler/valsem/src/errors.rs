use std::num::{ParseFloatError, ParseIntError};

use valsem_alias::AliasError;
use valsem_value::ValueError;

/// Errors surfaced by the harness.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot parse `{input}` as a number: {source}")]
    Parse {
        input: String,
        source: ParseFloatError,
    },

    #[error("invalid {var}=`{value}`: {source}")]
    Config {
        var: &'static str,
        value: String,
        source: ParseIntError,
    },

    #[error("{0}")]
    Usage(String),

    #[error("no probe matches `{name}`")]
    UnknownProbe { name: String },

    #[error(transparent)]
    Value(#[from] ValueError),

    #[error(transparent)]
    Alias(#[from] AliasError),
}
