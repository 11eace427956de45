//! Google Maps Platform adapters for routing and geocoding.

mod duration;
mod geocode;
mod google;

pub use duration::parse_duration_token;
pub use geocode::GoogleGeocoder;
pub use google::GoogleRoutesProvider;

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ROUTES_URL: &str = "https://routes.googleapis.com/directions/v2:computeRoutes";
pub const DEFAULT_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Upper bound accepted for [`ProviderConfig::departure_offset_secs`].
pub const MAX_DEPARTURE_OFFSET_SECS: i64 = 86_400;

/// Process-wide provider settings, read once at start-up and shared by the
/// routing and geocoding adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Google Maps Platform key sent with every request.
    pub api_key: String,
    pub routes_url: String,
    pub geocode_url: String,
    /// Per-request HTTP timeout.
    pub request_timeout_ms: u64,
    /// How far in the future the requested departure time lies.
    pub departure_offset_secs: i64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            routes_url: DEFAULT_ROUTES_URL.to_string(),
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            request_timeout_ms: 10_000,
            departure_offset_secs: 120,
        }
    }
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Builder: override the Routes API endpoint.
    pub fn with_routes_url(mut self, url: impl Into<String>) -> Self {
        self.routes_url = url.into();
        self
    }

    /// Builder: override the Geocoding API endpoint.
    pub fn with_geocode_url(mut self, url: impl Into<String>) -> Self {
        self.geocode_url = url.into();
        self
    }

    /// Builder: set the per-request HTTP timeout.
    pub fn with_request_timeout_ms(mut self, ms: u64) -> Self {
        self.request_timeout_ms = ms;
        self
    }

    /// Builder: set how far ahead the requested departure lies.
    pub fn with_departure_offset_secs(mut self, secs: i64) -> Self {
        self.departure_offset_secs = secs;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
