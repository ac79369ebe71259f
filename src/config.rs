//! Runtime configuration, read from environment variables.
//!
//! - `BLOCKFALL_SEED`: fixed seed for the piece sequence (random when unset)
//! - `BLOCKFALL_LOG_PATH`: append logs to this file (no logging when unset)
//! - `BLOCKFALL_LOG`: `env_logger` filter, defaults to `info`

use std::env;

pub const ENV_SEED: &str = "BLOCKFALL_SEED";
pub const ENV_LOG_PATH: &str = "BLOCKFALL_LOG_PATH";
pub const ENV_LOG_FILTER: &str = "BLOCKFALL_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: Option<u64>,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unparseable or blank values fall
    /// back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = non_empty(ENV_SEED).and_then(|s| s.parse().ok());
        let log_path = non_empty(ENV_LOG_PATH);
        let log_filter = non_empty(ENV_LOG_FILTER).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            seed,
            log_path,
            log_filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = RunConfig::from_lookup(lookup(&[]));
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn reads_every_key() {
        let config = RunConfig::from_lookup(lookup(&[
            (ENV_SEED, "42"),
            (ENV_LOG_PATH, " /tmp/blockfall.log "),
            (ENV_LOG_FILTER, "debug"),
        ]));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_path.as_deref(), Some("/tmp/blockfall.log"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn bad_seed_and_blank_path_fall_back() {
        let config = RunConfig::from_lookup(lookup(&[(ENV_SEED, "not-a-number"), (ENV_LOG_PATH, "  ")]));
        assert_eq!(config.seed, None);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn from_env_does_not_panic() {
        let _config = RunConfig::from_env();
    }
}
