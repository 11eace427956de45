//! Gate ranking endpoints
//!
//! GET /api/all-gates-eta?user_location=..&society_id=..  - every reachable gate, fastest first
//! GET /api/optimal-gate?user_location=..&society_id=..   - the single best gate

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use gatewise_kernel::geo::looks_like_coordinate_pair;
use gatewise_kernel::{
    Coordinate, GateEta, GateId, GeocodeProvider, RecommendedGate, SocietyId, parse_coordinate_pair,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::handlers::parse_id;
use crate::state::AppState;

const UNRESOLVED_LOCATION: &str = "Invalid location provided. Could not fetch coordinates.";

// ─────────────────────────────────────────────────────────────────────────────
// DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Query string shared by both ranking endpoints
#[derive(Debug, Deserialize)]
pub struct EtaQuery {
    /// `"lat,lng"` or a free-text address
    pub user_location: Option<String>,
    pub society_id: Option<String>,
}

/// One entry of GET /api/all-gates-eta
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GateEtaDto {
    pub id: GateId,
    pub name: String,
    pub location: Coordinate,
    pub estimated_time: String,
    pub distance: String,
    pub duration_seconds: u64,
    pub distance_meters: u64,
    pub is_best: bool,
}

impl GateEtaDto {
    fn new(eta: GateEta, is_best: bool) -> Self {
        Self {
            id: eta.gate.id,
            name: eta.gate.name,
            location: eta.gate.location,
            estimated_time: eta.estimated_time,
            distance: eta.distance,
            duration_seconds: eta.duration_seconds,
            distance_meters: eta.distance_meters,
            is_best,
        }
    }
}

/// Body of GET /api/optimal-gate
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalGateDto {
    pub recommended_gate: RecommendedGate,
    pub estimated_time: String,
    pub time_saved: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Turn the raw `user_location` parameter into a coordinate.
///
/// Text shaped like `lat,lng` is parsed (and range-checked) directly; anything
/// else goes to the geocoder.
pub async fn resolve_location(geocoder: &dyn GeocodeProvider, raw: &str) -> ApiResult<Coordinate> {
    let text = raw.trim();
    if looks_like_coordinate_pair(text) {
        return Ok(parse_coordinate_pair(text)?);
    }
    debug!(location = %text, "geocoding free-text location");
    geocoder
        .resolve(text)
        .await
        .ok_or_else(|| ApiError::InvalidRequest(UNRESOLVED_LOCATION.to_string()))
}

fn required_params(query: EtaQuery) -> ApiResult<(String, String)> {
    match (query.user_location, query.society_id) {
        (Some(location), Some(society)) if !location.trim().is_empty() && !society.trim().is_empty() => {
            Ok((location, society))
        }
        _ => Err(ApiError::InvalidRequest(
            "Missing required parameters: user_location and society_id".to_string(),
        )),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /api/all-gates-eta
///
/// Ranks every active gate of the society; `isBest` marks the first entry.
pub async fn all_gates_eta(
    State(state): State<Arc<AppState>>,
    query: Result<Query<EtaQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query?;
    let (location, society) = required_params(query)?;
    let society_id: SocietyId = parse_id(&society, "society_id")?;
    let user_location = resolve_location(state.geocoder.as_ref(), &location).await?;

    let gates = state.catalog.list_active_gates(society_id).await?;
    let ranked = state.engine.rank_all(user_location, &gates).await?;

    let gates: Vec<GateEtaDto> = ranked
        .into_iter()
        .enumerate()
        .map(|(i, eta)| GateEtaDto::new(eta, i == 0))
        .collect();

    Ok(Json(serde_json::json!({ "gates": gates })))
}

/// GET /api/optimal-gate
///
/// Recommends the fastest gate and how much time it saves against the rest.
pub async fn optimal_gate(
    State(state): State<Arc<AppState>>,
    query: Result<Query<EtaQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query?;
    let (location, society) = required_params(query)?;
    let society_id: SocietyId = parse_id(&society, "society_id")?;
    let user_location = resolve_location(state.geocoder.as_ref(), &location).await?;

    state.catalog.get_society(society_id).await?;
    let gates = state.catalog.list_active_gates(society_id).await?;
    let rec = state.engine.recommend(user_location, society_id, &gates).await?;

    Ok(Json(OptimalGateDto {
        recommended_gate: rec.recommended_gate,
        estimated_time: rec.estimated_time,
        time_saved: rec.time_saved,
    }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Router
// ─────────────────────────────────────────────────────────────────────────────

/// Build the ranking router sub-tree
pub fn eta_router() -> axum::Router<Arc<AppState>> {
    use axum::routing::get;
    axum::Router::new()
        .route("/all-gates-eta", get(all_gates_eta))
        .route("/optimal-gate", get(optimal_gate))
}
