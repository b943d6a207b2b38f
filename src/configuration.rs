//! Config for tournament and simulation runs
//!
//! Configuration can be created programmatically using [`Configuration::new()`] or by reading
//! environment variables using [`Configuration::from_env()`].
//!
//! # Environment Variables
//!
//! All values are optional. Flags are enabled by the case-insensitive value `"true"`.
//!
//! - `FIAR_VERBOSE` — Print one line per finished match (default: `false`)
//! - `FIAR_LOG` — Enable logging to a file (default: `false`)
//! - `FIAR_MAX_PARALLEL` — Maximum number of matches running at once, `0` for no limit
//!   (default: number of logical CPUs)
//! - `FIAR_SEED` — Base seed for the built-in player factories (default: none, random seed)

use std::str::FromStr;

use tracing::warn;

/// Configuration of tournament and simulation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    pub(crate) verbose: bool,
    pub(crate) log: bool,
    pub(crate) max_parallel_matches: usize,
    pub(crate) seed: Option<u64>,
}

impl Configuration {
    /// Create a new configuration with default parameters.
    ///
    /// By default:
    /// - Finished matches are not printed.
    /// - Logging to file is disabled.
    /// - As many matches run at once as there are logical CPUs.
    /// - No seed is fixed.
    pub fn new() -> Self {
        Self {
            verbose: false,
            log: false,
            max_parallel_matches: num_cpus::get(),
            seed: None,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Unset variables keep their default value. Numbers that do not parse are reported and
    /// ignored.
    pub fn from_env() -> Self {
        fn get_env_flag(var: &str, default: bool) -> bool {
            match std::env::var(var) {
                Ok(val) => val.eq_ignore_ascii_case("true"),
                Err(_) => default,
            }
        }

        fn get_env_number<T: FromStr>(var: &str) -> Option<T> {
            let val = std::env::var(var).ok()?;
            match val.trim().parse() {
                Ok(n) => Some(n),
                Err(_) => {
                    warn!("ignoring {var}={val:?}: not a number");
                    None
                }
            }
        }

        let default = Self::new();
        Self {
            verbose: get_env_flag("FIAR_VERBOSE", default.verbose),
            log: get_env_flag("FIAR_LOG", default.log),
            max_parallel_matches: get_env_number("FIAR_MAX_PARALLEL")
                .unwrap_or(default.max_parallel_matches),
            seed: get_env_number("FIAR_SEED"),
        }
    }

    /// Enable or disable printing of finished matches.
    pub fn with_verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }

    /// Enable or disable logging to file.
    pub fn with_log(mut self, value: bool) -> Self {
        self.log = value;
        self
    }

    /// Limit the number of matches running at once. `0` removes the limit.
    pub fn with_max_parallel_matches(mut self, value: usize) -> Self {
        self.max_parallel_matches = value;
        self
    }

    /// Fix the base seed used to build player factories.
    pub fn with_seed(mut self, value: Option<u64>) -> Self {
        self.seed = value;
        self
    }

    /// The configured seed, or a fresh random one.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Whether finished matches are printed.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Whether tournaments install the file logger.
    pub fn log(&self) -> bool {
        self.log
    }

    /// Maximum number of matches running at once, `0` meaning no limit.
    pub fn max_parallel_matches(&self) -> usize {
        self.max_parallel_matches
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = Configuration::new()
            .with_verbose(true)
            .with_max_parallel_matches(0)
            .with_seed(Some(3));
        assert!(config.verbose());
        assert!(!config.log());
        assert_eq!(config.max_parallel_matches(), 0);
        assert_eq!(config.seed_or_random(), 3);
    }

    // the only test touching FIAR_* variables, so it cannot race with another one
    #[test]
    fn from_env_reads_flags_and_ignores_bad_numbers() {
        std::env::set_var("FIAR_VERBOSE", "TRUE");
        std::env::set_var("FIAR_LOG", "yes");
        std::env::set_var("FIAR_MAX_PARALLEL", "many");
        std::env::set_var("FIAR_SEED", " 42 ");
        let config = Configuration::from_env();
        assert!(config.verbose());
        assert!(!config.log());
        assert_eq!(config.max_parallel_matches(), num_cpus::get());
        assert_eq!(config.seed, Some(42));

        std::env::set_var("FIAR_MAX_PARALLEL", "0");
        std::env::set_var("FIAR_SEED", "-1");
        let config = Configuration::from_env();
        assert_eq!(config.max_parallel_matches(), 0);
        assert_eq!(config.seed, None);

        for var in ["FIAR_VERBOSE", "FIAR_LOG", "FIAR_MAX_PARALLEL", "FIAR_SEED"] {
            std::env::remove_var(var);
        }
        assert_eq!(Configuration::from_env(), Configuration::new());
    }

    #[test]
    fn defaults_use_every_cpu() {
        let config = Configuration::default();
        assert!(config.max_parallel_matches() >= 1);
        assert_eq!(config.seed, None);
    }
}
