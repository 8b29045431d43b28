//! Runtime configuration from `DIRTINT_*` environment variables.

use anyhow::{Result, anyhow};
use std::env;

/// Global fallback color when no directive applies.
pub const DEFAULT_COLOR: &str = "#1E1E2E";

/// Default periodic tick, in seconds.
pub const DEFAULT_INTERVAL_SECS: u64 = 300;

/// Environment variable for [`Config::default_color`].
pub const ENV_DEFAULT_COLOR: &str = "DIRTINT_DEFAULT_COLOR";
/// Environment variable for [`Config::debug`].
pub const ENV_DEBUG: &str = "DIRTINT_DEBUG";
/// Environment variable for [`Config::interval_secs`].
pub const ENV_INTERVAL: &str = "DIRTINT_INTERVAL";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directive used when no directive file is found, and the fallback
    /// color when a resolved color is invalid
    pub default_color: String,
    /// Print diagnostics for invalid colors and raise the log level
    pub debug: bool,
    /// Seconds between periodic refreshes
    pub interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_COLOR.to_string(),
            debug: false,
            interval_secs: DEFAULT_INTERVAL_SECS,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `DIRTINT_DEBUG` is not a boolean or
    /// `DIRTINT_INTERVAL` is not a non-negative integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(color) = get(ENV_DEFAULT_COLOR) {
            config.default_color = color;
        }
        if let Some(flag) = get(ENV_DEBUG) {
            config.debug = parse_bool(&flag)
                .ok_or_else(|| anyhow!("invalid {ENV_DEBUG} value `{flag}`: expected a boolean"))?;
        }
        if let Some(interval) = get(ENV_INTERVAL) {
            let parsed = interval.parse::<u64>().map_err(|_| {
                anyhow!("invalid {ENV_INTERVAL} value `{interval}`: expected integer seconds")
            })?;
            // zero would spin the watch loop
            config.interval_secs = parsed.max(1);
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
