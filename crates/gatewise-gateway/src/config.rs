//! Service configuration.
//!
//! Values come from an optional file (YAML, TOML or JSON) named by
//! `GATEWISE_CONFIG`, then from individual environment variables:
//!
//! | Variable | Overrides | Default |
//! |----------|-----------|---------|
//! | `PORT` | `port` | `3001` |
//! | `GOOGLE_MAPS_API_KEY` | `provider.api_key` | *(none, required)* |
//! | `ROUTES_API_URL` | `provider.routes_url` | Google Routes v2 `computeRoutes` |
//! | `GEOCODE_API_URL` | `provider.geocode_url` | Google Geocoding JSON |

use gatewise_foundation::{MAX_DEPARTURE_OFFSET_SECS, ProviderConfig};
use gatewise_kernel::config::{ConfigError, ConfigResult, load_config};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const CONFIG_PATH_ENV: &str = "GATEWISE_CONFIG";

/// Top-level configuration of the gateway process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// TCP port to listen on.
    pub port: u16,
    pub provider: ProviderConfig,
    pub ranking: RankingConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            provider: ProviderConfig::default(),
            ranking: RankingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Upper bound on a single provider call inside a ranking request.
    /// `0` disables the bound.
    pub call_timeout_ms: u64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            call_timeout_ms: 15_000,
        }
    }
}

impl RankingConfig {
    pub fn call_timeout(&self) -> Option<Duration> {
        (self.call_timeout_ms > 0).then(|| Duration::from_millis(self.call_timeout_ms))
    }
}

impl ServiceConfig {
    /// Load from the process environment and validate.
    pub fn load() -> ConfigResult<Self> {
        let base = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => load_config(path.trim())?,
            _ => Self::default(),
        };
        let config = base.with_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment-style overrides read through `lookup`.
    ///
    /// Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(port) = get("PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("PORT must be a port number, got '{port}'")))?;
        }
        if let Some(key) = get("GOOGLE_MAPS_API_KEY") {
            self.provider.api_key = key;
        }
        if let Some(url) = get("ROUTES_API_URL") {
            self.provider.routes_url = url;
        }
        if let Some(url) = get("GEOCODE_API_URL") {
            self.provider.geocode_url = url;
        }
        Ok(self)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.provider.api_key.trim().is_empty() {
            return Err(ConfigError::MissingValue(
                "provider.api_key (set GOOGLE_MAPS_API_KEY)".to_string(),
            ));
        }
        let offset = self.provider.departure_offset_secs;
        if !(0..=MAX_DEPARTURE_OFFSET_SECS).contains(&offset) {
            return Err(ConfigError::Parse(format!(
                "provider.departure_offset_secs must be within 0..={MAX_DEPARTURE_OFFSET_SECS}, got {offset}"
            )));
        }
        Ok(())
    }
}
