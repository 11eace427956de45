//! Society endpoints
//!
//! POST /api/societies                   - register a society
//! GET  /api/societies/{societyId}/gates - every gate of a society, active or not

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use gatewise_kernel::{NewSociety, SocietyId};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::handlers::parse_id;
use crate::state::AppState;

/// Request body for POST /api/societies
#[derive(Debug, Deserialize)]
pub struct CreateSocietyRequest {
    pub name: Option<String>,
    pub area: Option<String>,
    /// Polygon rings of `[lng, lat]` points
    pub boundary: Option<Vec<Vec<[f64; 2]>>>,
}

/// POST /api/societies
pub async fn create_society(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateSocietyRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(req) = body?;
    let (Some(name), Some(area), Some(boundary)) = (req.name, req.area, req.boundary) else {
        return Err(ApiError::InvalidRequest("Missing required fields".to_string()));
    };
    if area.trim().is_empty() || boundary.is_empty() {
        return Err(ApiError::InvalidRequest("Missing required fields".to_string()));
    }

    let society = state
        .catalog
        .create_society(NewSociety {
            name,
            area,
            boundary,
        })
        .await?;

    info!(society_id = %society.id, name = %society.name, "society created");
    Ok((StatusCode::CREATED, Json(society)))
}

/// GET /api/societies/{societyId}/gates
pub async fn list_society_gates(
    State(state): State<Arc<AppState>>,
    Path(society_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let society_id: SocietyId = parse_id(&society_id, "society_id")?;
    Ok(Json(state.catalog.list_gates(society_id).await?))
}

/// Build the society router sub-tree
pub fn societies_router() -> axum::Router<Arc<AppState>> {
    use axum::routing::{get, post};
    axum::Router::new()
        .route("/societies", post(create_society))
        .route("/societies/{society_id}/gates", get(list_society_gates))
}
