//! Google Geocoding API adapter.

use super::ProviderConfig;
use async_trait::async_trait;
use gatewise_kernel::{Coordinate, GeocodeProvider};
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

/// Resolves free-text addresses through the Google Geocoding API.
pub struct GoogleGeocoder {
    config: Arc<ProviderConfig>,
    client: Client,
}

impl GoogleGeocoder {
    pub fn new(config: Arc<ProviderConfig>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.request_timeout()).build()?;
        Ok(Self { config, client })
    }

    async fn lookup(&self, address: &str) -> Result<Coordinate, String> {
        let response = self
            .client
            .get(&self.config.geocode_url)
            .query(&[("address", address), ("key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;

        let payload: GeocodeResponse = response.json().await.map_err(|e| e.to_string())?;
        if payload.status != "OK" {
            return Err(format!("geocoding failed: {}", payload.status));
        }
        let first = payload
            .results
            .into_iter()
            .next()
            .ok_or_else(|| "geocoding returned no results".to_string())?;
        let LatLng { lat, lng } = first.geometry.location;
        Coordinate::new(lat, lng).map_err(|e| e.to_string())
    }
}

#[async_trait]
impl GeocodeProvider for GoogleGeocoder {
    async fn resolve(&self, address: &str) -> Option<Coordinate> {
        match self.lookup(address).await {
            Ok(coordinate) => {
                debug!(address, %coordinate, "address geocoded");
                Some(coordinate)
            }
            Err(reason) => {
                warn!(address, reason = %reason, "address could not be geocoded");
                None
            }
        }
    }
}
