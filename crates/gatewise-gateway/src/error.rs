//! Gateway error types

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gatewise_kernel::{CatalogError, CoordinateError, GateId, RankingError, SocietyId};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Every failure an HTTP handler can surface.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("society not found: {0}")]
    SocietyNotFound(SocietyId),

    #[error("gate not found: {0}")]
    GateNotFound(GateId),

    #[error("no active gates found for this society")]
    NoActiveGates,

    #[error("failed to retrieve ETA for all gates")]
    NoRouteFound,

    #[error("no valid routes found to any gates")]
    NoValidRoutes,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::SocietyNotFound(_) | ApiError::GateNotFound(_) | ApiError::NoActiveGates => {
                StatusCode::NOT_FOUND
            }
            ApiError::NoRouteFound | ApiError::NoValidRoutes => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "INVALID_REQUEST",
            ApiError::SocietyNotFound(_) => "SOCIETY_NOT_FOUND",
            ApiError::GateNotFound(_) => "GATE_NOT_FOUND",
            ApiError::NoActiveGates => "NO_ACTIVE_GATES",
            ApiError::NoRouteFound => "NO_ROUTE_FOUND",
            ApiError::NoValidRoutes => "NO_VALID_ROUTES",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::InvalidRequest(msg) | ApiError::Internal(msg) => msg.clone(),
            ApiError::SocietyNotFound(id) => format!("society '{id}' not found"),
            ApiError::GateNotFound(id) => format!("gate '{id}' not found"),
            ApiError::NoActiveGates => "No active gates found for this society".to_string(),
            ApiError::NoRouteFound => "Failed to retrieve ETA for all gates".to_string(),
            ApiError::NoValidRoutes => "No valid routes found to any gates".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(code = self.code(), error = %self, "request failed");
        }

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.message(),
            }
        }));

        (status, body).into_response()
    }
}

impl From<RankingError> for ApiError {
    fn from(err: RankingError) -> Self {
        match err {
            RankingError::NoActiveGates => ApiError::NoActiveGates,
            RankingError::NoRouteFound => ApiError::NoRouteFound,
            RankingError::NoValidRoutes => ApiError::NoValidRoutes,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::SocietyNotFound(id) => ApiError::SocietyNotFound(id),
            CatalogError::GateNotFound(id) => ApiError::GateNotFound(id),
            CatalogError::InvalidInput(msg) => ApiError::InvalidRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<CoordinateError> for ApiError {
    fn from(err: CoordinateError) -> Self {
        ApiError::InvalidRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_failures_map_to_statuses() {
        assert_eq!(ApiError::from(RankingError::NoActiveGates).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(RankingError::NoRouteFound).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(ApiError::from(RankingError::NoValidRoutes).code(), "NO_VALID_ROUTES");
    }

    #[test]
    fn catalog_failures_keep_their_ids() {
        let id = GateId::new();
        let err = ApiError::from(CatalogError::GateNotFound(id));
        assert_eq!(err.code(), "GATE_NOT_FOUND");
        assert!(err.message().contains(&id.to_string()));

        let err = ApiError::from(CatalogError::InvalidInput("name must not be empty".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn coordinate_errors_are_bad_requests() {
        let err = ApiError::from(CoordinateError::InvalidValue);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "INVALID_REQUEST");
    }
}
