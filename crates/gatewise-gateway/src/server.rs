//! Axum-based HTTP server.
//!
//! [`GateServer`] wires the Google adapters, the in-memory catalog and the
//! ranking engine into a running axum service.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/` | Service banner. |
//! | `GET`  | `/health` | Liveness check, always `200 OK`. |
//! | `GET`  | `/api/all-gates-eta` | Every reachable gate of a society, fastest first. |
//! | `GET`  | `/api/optimal-gate` | The fastest gate and the time it saves. |
//! | `POST` | `/api/societies` | Register a society. |
//! | `GET`  | `/api/societies/{societyId}/gates` | All gates of a society. |
//! | `POST` | `/api/gates` | Create a gate. |
//! | `GET` / `PATCH` / `PUT` / `DELETE` | `/api/gates/{id}` | Read, update or remove a gate. |

use crate::config::ServiceConfig;
use crate::handlers::{eta_router, gates_router, health_router, societies_router};
use crate::state::AppState;
use axum::{Router, http::Method};
use gatewise_foundation::{GateRankingEngine, GoogleGeocoder, GoogleRoutesProvider, InMemoryGateCatalog};
use gatewise_kernel::config::ConfigError;
use std::sync::Arc;
use thiserror::Error;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Start-up failures.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the complete axum [`Router`] over `state`.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(eta_router())
        .merge(gates_router())
        .merge(societies_router());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .merge(health_router())
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// High-level server owning the service configuration.
pub struct GateServer {
    config: ServiceConfig,
}

impl GateServer {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Construct the production collaborators: Google Routes and Geocoding
    /// clients sharing one [`ProviderConfig`](gatewise_foundation::ProviderConfig),
    /// and an empty in-memory catalog.
    pub fn build_state(&self) -> Result<AppState, ServerError> {
        self.config.validate()?;
        let provider_cfg = Arc::new(self.config.provider.clone());

        let routes = GoogleRoutesProvider::new(provider_cfg.clone())
            .map_err(|e| ServerError::Client(e.to_string()))?;
        let geocoder =
            GoogleGeocoder::new(provider_cfg).map_err(|e| ServerError::Client(e.to_string()))?;

        let mut engine = GateRankingEngine::new(Arc::new(routes));
        if let Some(timeout) = self.config.ranking.call_timeout() {
            engine = engine.with_call_timeout(timeout);
        }

        Ok(AppState::new(
            Arc::new(InMemoryGateCatalog::new()),
            Arc::new(engine),
            Arc::new(geocoder),
        ))
    }

    /// Bind to `0.0.0.0:{port}` and serve until the process exits.
    pub async fn start(self) -> Result<(), ServerError> {
        let app = build_router(self.build_state()?);
        let addr = format!("0.0.0.0:{}", self.config.port);
        info!(addr = %addr, "gatewise gateway starting");
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;
        Ok(())
    }
}
