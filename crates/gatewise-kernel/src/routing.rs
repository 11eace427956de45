//! Route-time and geocoding contracts.
//!
//! A [`RouteTimeProvider`] never surfaces an error the caller has to unwind:
//! every failure mode resolves to a [`RouteFailure`] value, so the ranking
//! engine can treat "no data for this gate" with ordinary control flow.

use crate::geo::Coordinate;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Travel estimate for one origin/destination pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEstimate {
    pub duration_seconds: u64,
    /// Providers may omit the distance; `None` means "not reported".
    pub distance_meters: Option<u64>,
}

impl RouteEstimate {
    pub fn new(duration_seconds: u64, distance_meters: u64) -> Self {
        Self {
            duration_seconds,
            distance_meters: Some(distance_meters),
        }
    }

    pub fn without_distance(duration_seconds: u64) -> Self {
        Self {
            duration_seconds,
            distance_meters: None,
        }
    }
}

/// Single-gate provider failure. Tolerated by the engine: the gate is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteFailure {
    /// Transport problem: timeout, non-2xx status, connection error.
    #[error("routing provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The response arrived but could not be interpreted.
    #[error("malformed routing response: {0}")]
    MalformedResponse(String),

    /// The provider answered with no routes.
    #[error("no route found")]
    NoRouteFound,
}

/// Traffic-aware travel-time lookup.
#[async_trait]
pub trait RouteTimeProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Estimate driving time from `origin` to `destination`.
    async fn estimate(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RouteEstimate, RouteFailure>;
}

/// Free-text address resolution.
#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    /// Resolve `address` to a coordinate; `None` on any failure.
    async fn resolve(&self, address: &str) -> Option<Coordinate>;
}
