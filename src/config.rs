//! Ship loadout configuration
//!
//! Values come from defaults, then the environment, then command-line flags.

use crate::models::constants::{
    DEFAULT_FAILURE_RATE, DEFAULT_SEED, FAILURE_RATE_ENV, INITIAL_TORPEDOES, SEED_ENV,
};
use crate::models::errors::ConfigError;

/// Loadout and randomness settings for a ship built from photon stores.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipConfig {
    pub primary_torpedoes: u32,
    pub secondary_torpedoes: u32,
    /// Probability in 0.0..=1.0 that a single launch jams.
    pub failure_rate: f64,
    pub seed: u64,
}

impl Default for ShipConfig {
    fn default() -> Self {
        ShipConfig {
            primary_torpedoes: INITIAL_TORPEDOES,
            secondary_torpedoes: INITIAL_TORPEDOES,
            failure_rate: DEFAULT_FAILURE_RATE,
            seed: DEFAULT_SEED,
        }
    }
}

impl ShipConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read overrides through `lookup`, which maps a variable name to its
    /// value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ShipConfig::default();

        if let Some(raw) = lookup(FAILURE_RATE_ENV) {
            config.failure_rate = parse_var(FAILURE_RATE_ENV, &raw)?;
        }
        if let Some(raw) = lookup(SEED_ENV) {
            config.seed = parse_var(SEED_ENV, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(ConfigError::FailureRateOutOfRange(self.failure_rate));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(var: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var: var.to_string(),
        value: raw.to_string(),
    })
}
