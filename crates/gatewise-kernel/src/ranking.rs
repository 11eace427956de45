//! Ranking results and request-level ranking failures.

use crate::format::{format_distance, format_duration};
use crate::gate::{Gate, GateId};
use crate::geo::Coordinate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One successfully evaluated gate, with both raw and display values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateEta {
    pub gate: Gate,
    pub duration_seconds: u64,
    pub distance_meters: u64,
    /// `"M min S sec"`
    pub estimated_time: String,
    /// `"X.Y km"`
    pub distance: String,
}

impl GateEta {
    pub fn new(gate: Gate, duration_seconds: u64, distance_meters: u64) -> Self {
        Self {
            gate,
            duration_seconds,
            distance_meters,
            estimated_time: format_duration(duration_seconds as f64),
            distance: format_distance(distance_meters as f64),
        }
    }
}

/// The subset of a gate exposed in a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedGate {
    pub id: GateId,
    pub name: String,
    pub location: Coordinate,
}

impl From<&Gate> for RecommendedGate {
    fn from(gate: &Gate) -> Self {
        Self {
            id: gate.id,
            name: gate.name.clone(),
            location: gate.location,
        }
    }
}

/// Single best-gate answer for an "optimal gate" query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub recommended_gate: RecommendedGate,
    pub estimated_time: String,
    pub time_saved: String,
    pub estimated_seconds: u64,
    /// Never negative; zero when only one gate could be evaluated.
    pub time_saved_seconds: u64,
}

/// Failures that make a whole ranking request unanswerable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    /// There was nothing to rank.
    #[error("no active gates found for this society")]
    NoActiveGates,

    /// Every gate was dropped while building the ETA list.
    #[error("failed to retrieve ETA for all gates")]
    NoRouteFound,

    /// Every gate was dropped while computing a recommendation.
    #[error("no valid routes found to any gates")]
    NoValidRoutes,
}
