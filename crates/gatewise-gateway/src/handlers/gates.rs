//! Gate management endpoints
//!
//! POST   /api/gates        - create a gate for an existing society
//! GET    /api/gates/{id}   - fetch one gate
//! PATCH  /api/gates/{id}   - partial update (PUT is accepted as an alias)
//! DELETE /api/gates/{id}   - remove a gate

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use gatewise_kernel::{Coordinate, GateId, GatePatch, NewGate, SocietyId};
use serde::{Deserialize, Deserializer, de};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::handlers::parse_id;
use crate::state::AppState;

// ─────────────────────────────────────────────────────────────────────────────
// DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for POST /api/gates
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGateRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lng: Option<f64>,
    pub society_id: Option<String>,
    /// Defaults to `true`
    pub is_active: Option<bool>,
}

/// Request body for PATCH / PUT /api/gates/{id}
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGateRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lng: Option<f64>,
    pub is_active: Option<bool>,
}

impl UpdateGateRequest {
    fn into_patch(self) -> ApiResult<GatePatch> {
        let location = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)?),
            (None, None) => None,
            _ => {
                return Err(ApiError::InvalidRequest(
                    "lat and lng must be provided together".to_string(),
                ));
            }
        };
        Ok(GatePatch {
            name: self.name,
            location,
            is_active: self.is_active,
        })
    }
}

/// Accept a JSON number or a string holding one.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("'{text}' is not a number"))),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// POST /api/gates
pub async fn create_gate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateGateRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(req) = body?;
    let (Some(name), Some(lat), Some(lng), Some(society)) = (req.name, req.lat, req.lng, req.society_id)
    else {
        return Err(ApiError::InvalidRequest("Missing required fields".to_string()));
    };

    let location = Coordinate::new(lat, lng)?;
    let society_id: SocietyId = parse_id(&society, "societyId")?;

    let mut new_gate = NewGate::new(name, location, society_id);
    if let Some(active) = req.is_active {
        new_gate = new_gate.with_active(active);
    }
    let gate = state.catalog.create_gate(new_gate).await?;

    info!(gate_id = %gate.id, society_id = %gate.society_id, name = %gate.name, "gate created");
    Ok((StatusCode::CREATED, Json(gate)))
}

/// GET /api/gates/{id}
pub async fn get_gate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id: GateId = parse_id(&id, "gate ID")?;
    Ok(Json(state.catalog.get_gate(id).await?))
}

/// PATCH /api/gates/{id}
///
/// Moves the gate only when both `lat` and `lng` are given. An empty body
/// returns the gate unchanged.
pub async fn update_gate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateGateRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let id: GateId = parse_id(&id, "gate ID")?;
    let Json(req) = body?;
    let patch = req.into_patch()?;

    if patch.is_empty() {
        return Ok(Json(state.catalog.get_gate(id).await?));
    }

    let gate = state.catalog.update_gate(id, patch).await?;
    info!(gate_id = %gate.id, active = gate.is_active, "gate updated");
    Ok(Json(gate))
}

/// DELETE /api/gates/{id}
pub async fn delete_gate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id: GateId = parse_id(&id, "gate ID")?;
    let removed = state.catalog.delete_gate(id).await?;

    info!(gate_id = %removed.id, "gate deleted");
    Ok(Json(json!({ "message": "Gate deleted successfully" })))
}

// ─────────────────────────────────────────────────────────────────────────────
// Router
// ─────────────────────────────────────────────────────────────────────────────

/// Build the gate management router sub-tree
pub fn gates_router() -> axum::Router<Arc<AppState>> {
    use axum::routing::{get, post};
    axum::Router::new()
        .route("/gates", post(create_gate))
        .route(
            "/gates/{id}",
            get(get_gate)
                .patch(update_gate)
                .put(update_gate)
                .delete(delete_gate),
        )
}
