//! Runtime configuration.
//!
//! Values come from the environment (a `.env` file is loaded by the binary
//! before [`Config::from_env`] runs) and can be overridden on the command line.

use std::path::PathBuf;

/// Largest number of child networks a single subnetting call may produce.
pub const DEFAULT_MAX_SUBNETS: usize = 65536;

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

pub const MAX_SUBNETS_ENV: &str = "SUBNET_CALC_MAX_SUBNETS";
pub const LOG_CONFIG_ENV: &str = "SUBNET_CALC_LOG_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Ceiling on `2^(new_prefix - prefix)` for subnetting.
    pub max_subnets: usize,
    /// Path of the log4rs YAML file.
    pub log_config: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_subnets: DEFAULT_MAX_SUBNETS,
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
        }
    }
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(MAX_SUBNETS_ENV) {
            match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.max_subnets = n,
                _ => log::warn!(
                    "Ignoring {MAX_SUBNETS_ENV}={value:?}, using {}",
                    config.max_subnets
                ),
            }
        }
        if let Some(value) = lookup(LOG_CONFIG_ENV) {
            config.log_config = PathBuf::from(value);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.max_subnets, 65536);
        assert_eq!(config.log_config, PathBuf::from("log4rs.yml"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (MAX_SUBNETS_ENV, "1024"),
            (LOG_CONFIG_ENV, "/etc/subnet-calc/log4rs.yml"),
        ]));
        assert_eq!(config.max_subnets, 1024);
        assert_eq!(
            config.log_config,
            PathBuf::from("/etc/subnet-calc/log4rs.yml")
        );
    }

    #[test]
    fn test_bad_max_subnets_falls_back() {
        let config = Config::from_lookup(lookup_from(&[(MAX_SUBNETS_ENV, "lots")]));
        assert_eq!(config.max_subnets, DEFAULT_MAX_SUBNETS);
        let config = Config::from_lookup(lookup_from(&[(MAX_SUBNETS_ENV, "0")]));
        assert_eq!(config.max_subnets, DEFAULT_MAX_SUBNETS);
    }
}
