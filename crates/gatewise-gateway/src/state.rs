//! Shared application state for the HTTP service

use gatewise_foundation::GateRankingEngine;
use gatewise_kernel::{GateCatalog, GeocodeProvider};
use std::sync::Arc;

/// State shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Source of truth for societies and gates
    pub catalog: Arc<dyn GateCatalog>,
    /// Ranks gates by live travel time
    pub engine: Arc<GateRankingEngine>,
    /// Resolves free-text user locations
    pub geocoder: Arc<dyn GeocodeProvider>,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn GateCatalog>,
        engine: Arc<GateRankingEngine>,
        geocoder: Arc<dyn GeocodeProvider>,
    ) -> Self {
        Self {
            catalog,
            engine,
            geocoder,
        }
    }
}
