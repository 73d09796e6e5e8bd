//! Harness settings from the environment and command-line flags.

use valsem_intern::PoolConfig;

use crate::CliError;

/// Overrides the upper bound of the small-integer cache.
pub const INT_CACHE_HIGH_VAR: &str = "VALSEM_INT_CACHE_HIGH";

/// Pool config from [`INT_CACHE_HIGH_VAR`], or the default when unset.
pub fn pool_config_from_env() -> Result<PoolConfig, CliError> {
    parse_pool_config(std::env::var(INT_CACHE_HIGH_VAR).ok().as_deref())
}

pub fn parse_pool_config(int_cache_high: Option<&str>) -> Result<PoolConfig, CliError> {
    let Some(raw) = int_cache_high else {
        return Ok(PoolConfig::default());
    };
    let high = raw.trim().parse::<i32>().map_err(|source| CliError::Config {
        var: INT_CACHE_HIGH_VAR,
        value: raw.to_string(),
        source,
    })?;
    Ok(PoolConfig::with_int_cache_high(high))
}

/// Options for `valsem probes`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Run only probes whose name contains this text.
    pub filter: Option<String>,
    pub verbose: bool,
}

impl ProbeConfig {
    pub fn from_args(args: &[String]) -> Result<Self, CliError> {
        let mut config = ProbeConfig::default();
        for arg in args {
            if let Some(filter) = arg.strip_prefix("--filter=") {
                config.filter = Some(filter.to_string());
            } else if arg == "--verbose" || arg == "-v" {
                config.verbose = true;
            } else {
                return Err(CliError::Usage(format!("unknown option `{arg}`")));
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Tests can panic")]

    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_pool_config_default_when_unset() {
        assert_eq!(parse_pool_config(None).unwrap(), PoolConfig::default());
    }

    #[test]
    fn test_pool_config_raised() {
        let config = parse_pool_config(Some(" 1000 ")).unwrap();
        assert_eq!(config.int_cache_high(), 1000);
    }

    #[test]
    fn test_pool_config_rejects_garbage() {
        let err = parse_pool_config(Some("lots")).unwrap_err();
        assert!(matches!(err, CliError::Config { var, .. } if var == INT_CACHE_HIGH_VAR));
    }

    #[test]
    fn test_probe_flags() {
        let config = ProbeConfig::from_args(&args(&["--filter=bool", "-v"])).unwrap();
        assert_eq!(
            config,
            ProbeConfig {
                filter: Some("bool".to_string()),
                verbose: true,
            }
        );
    }

    #[test]
    fn test_unknown_flag() {
        let err = ProbeConfig::from_args(&args(&["--fast"])).unwrap_err();
        assert_eq!(err.to_string(), "unknown option `--fast`");
    }
}
