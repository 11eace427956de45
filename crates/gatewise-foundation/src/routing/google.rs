//! Google Routes API (`directions/v2:computeRoutes`) adapter.
//!
//! [`GoogleRoutesProvider`] asks for a single traffic-aware driving route with
//! a departure a couple of minutes in the future and maps every outcome onto
//! a [`RouteEstimate`] or a [`RouteFailure`]; nothing escapes as a panic or an
//! opaque transport error.

use super::ProviderConfig;
use super::duration::parse_duration_token;
use async_trait::async_trait;
use chrono::{SecondsFormat, TimeDelta, Utc};
use gatewise_kernel::{Coordinate, RouteEstimate, RouteFailure, RouteTimeProvider};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

const FIELD_MASK: &str = "routes.duration,routes.distanceMeters";

// ─────────────────────────────────────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComputeRoutesRequest {
    origin: Waypoint,
    destination: Waypoint,
    travel_mode: &'static str,
    routing_preference: &'static str,
    departure_time: String,
    compute_alternative_routes: bool,
}

#[derive(Debug, Serialize)]
struct Waypoint {
    location: Location,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Location {
    lat_lng: LatLng,
}

#[derive(Debug, Serialize)]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

impl From<Coordinate> for Waypoint {
    fn from(c: Coordinate) -> Self {
        Self {
            location: Location {
                lat_lng: LatLng {
                    latitude: c.lat(),
                    longitude: c.lng(),
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ComputeRoutesResponse {
    #[serde(default)]
    routes: Option<Vec<RouteDto>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteDto {
    #[serde(default)]
    duration: Option<String>,
    // Kept loose so a non-numeric distance reads as "absent" rather than
    // failing the whole response.
    #[serde(default)]
    distance_meters: Option<serde_json::Value>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Provider
// ─────────────────────────────────────────────────────────────────────────────

/// Traffic-aware [`RouteTimeProvider`] backed by the Google Routes API.
pub struct GoogleRoutesProvider {
    config: Arc<ProviderConfig>,
    client: Client,
}

impl GoogleRoutesProvider {
    /// Build the provider and its HTTP client from the shared configuration.
    pub fn new(config: Arc<ProviderConfig>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.request_timeout()).build()?;
        Ok(Self { config, client })
    }

    fn request_body(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<ComputeRoutesRequest, RouteFailure> {
        let offset = self.config.departure_offset_secs;
        let departure = TimeDelta::try_seconds(offset)
            .and_then(|delta| Utc::now().checked_add_signed(delta))
            .ok_or_else(|| {
                RouteFailure::ProviderUnavailable(format!("departure offset {offset}s is out of range"))
            })?;
        Ok(ComputeRoutesRequest {
            origin: origin.into(),
            destination: destination.into(),
            travel_mode: "DRIVE",
            routing_preference: "TRAFFIC_AWARE",
            departure_time: departure.to_rfc3339_opts(SecondsFormat::Millis, true),
            compute_alternative_routes: false,
        })
    }
}

#[async_trait]
impl RouteTimeProvider for GoogleRoutesProvider {
    fn name(&self) -> &str {
        "google-routes"
    }

    #[instrument(skip_all, fields(provider = "google-routes", origin = %origin, destination = %destination))]
    async fn estimate(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RouteEstimate, RouteFailure> {
        let body = self.request_body(origin, destination)?;

        let response = self
            .client
            .post(&self.config.routes_url)
            .header("X-Goog-Api-Key", &self.config.api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(&body)
            .send()
            .await
            .map_err(|e| RouteFailure::ProviderUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RouteFailure::ProviderUnavailable(format!(
                "routes API returned HTTP {}",
                status.as_u16()
            )));
        }

        let payload: ComputeRoutesResponse = response
            .json()
            .await
            .map_err(|e| RouteFailure::MalformedResponse(e.to_string()))?;

        let route = payload
            .routes
            .and_then(|routes| routes.into_iter().next())
            .ok_or(RouteFailure::NoRouteFound)?;

        let token = route
            .duration
            .ok_or_else(|| RouteFailure::MalformedResponse("missing duration".to_string()))?;
        let duration_seconds = parse_duration_token(&token)?;
        let distance_meters = route.distance_meters.as_ref().and_then(|v| v.as_u64());

        debug!(duration_seconds, ?distance_meters, "route estimate received");

        Ok(RouteEstimate {
            duration_seconds,
            distance_meters,
        })
    }
}
