use clap::Parser;

use crate::config::ShipConfig;
use crate::models::errors::ConfigError;

#[derive(Debug, Parser)]
#[command(name = "gt4500", version, about = "GT4500 torpedo fire control")]
pub struct Args {
    /// Seed for the launchers' jam generator
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Torpedoes loaded in the primary store
    #[arg(long)]
    pub primary: Option<u32>,

    /// Torpedoes loaded in the secondary store
    #[arg(long)]
    pub secondary: Option<u32>,

    /// Probability (0.0 to 1.0) that a launch jams
    #[arg(long)]
    pub failure_rate: Option<f64>,
}

impl Args {
    /// Overlay the flags that were given onto `config`.
    pub fn apply(&self, mut config: ShipConfig) -> Result<ShipConfig, ConfigError> {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(primary) = self.primary {
            config.primary_torpedoes = primary;
        }
        if let Some(secondary) = self.secondary {
            config.secondary_torpedoes = secondary;
        }
        if let Some(rate) = self.failure_rate {
            config.failure_rate = rate;
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = Args::try_parse_from(["gt4500", "-s", "9", "--primary", "3", "--failure-rate", "0.5"]).unwrap();
        let config = args.apply(ShipConfig::default()).unwrap();

        assert_eq!(config.seed, 9);
        assert_eq!(config.primary_torpedoes, 3);
        assert_eq!(config.secondary_torpedoes, 10);
        assert_eq!(config.failure_rate, 0.5);
    }

    #[test]
    fn no_flags_keep_config() {
        let args = Args::try_parse_from(["gt4500"]).unwrap();
        assert_eq!(args.apply(ShipConfig::default()).unwrap(), ShipConfig::default());
    }

    #[test]
    fn out_of_range_flag_is_rejected() {
        let args = Args::try_parse_from(["gt4500", "--failure-rate", "2"]).unwrap();
        assert_eq!(
            args.apply(ShipConfig::default()),
            Err(ConfigError::FailureRateOutOfRange(2.0))
        );
    }
}
