//! Book radar settings loaded from env: PROVIDER_TIMEOUT_SECS.

use anyhow::Result;
use std::env;

pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct RadarConfig {
    /// Upper bound for a single provider call; a slower call is reported as a provider failure.
    pub provider_timeout_secs: u64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            provider_timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl RadarConfig {
    /// Loads from env; unset variables keep their defaults, unparsable ones are errors.
    pub fn from_env() -> Result<Self> {
        let provider_timeout_secs = match env::var("PROVIDER_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                anyhow::anyhow!("PROVIDER_TIMEOUT_SECS is not a number: {}", raw)
            })?,
            Err(_) => DEFAULT_PROVIDER_TIMEOUT_SECS,
        };
        let config = Self {
            provider_timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.provider_timeout_secs == 0 {
            anyhow::bail!("PROVIDER_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }
}
