//! Common test utilities shared across `gatewise-gateway` integration tests.
//!
//! The HTTP service is driven in-process through `tower::ServiceExt::oneshot`
//! with scripted routing and geocoding providers, so no network is touched.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use gatewise_foundation::{GateRankingEngine, InMemoryGateCatalog};
use gatewise_gateway::{AppState, server::build_router};
use gatewise_kernel::{Coordinate, GeocodeProvider, RouteEstimate, RouteFailure, RouteTimeProvider};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

pub fn at(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng).expect("test coordinate in range")
}

// ─────────────────────────────────────────────────────────────────────────────
// Scripted providers
// ─────────────────────────────────────────────────────────────────────────────

/// Answers by destination; unknown destinations have no route.
#[derive(Default)]
pub struct ScriptedRoutes {
    answers: HashMap<String, Result<RouteEstimate, RouteFailure>>,
}

impl ScriptedRoutes {
    pub fn route(mut self, destination: Coordinate, secs: u64, meters: u64) -> Self {
        self.answers
            .insert(destination.to_string(), Ok(RouteEstimate::new(secs, meters)));
        self
    }

    pub fn fail(mut self, destination: Coordinate, failure: RouteFailure) -> Self {
        self.answers.insert(destination.to_string(), Err(failure));
        self
    }
}

#[async_trait]
impl RouteTimeProvider for ScriptedRoutes {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn estimate(
        &self,
        _origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RouteEstimate, RouteFailure> {
        self.answers
            .get(&destination.to_string())
            .cloned()
            .unwrap_or(Err(RouteFailure::NoRouteFound))
    }
}

/// Resolves only the addresses it was given and counts every lookup.
#[derive(Default)]
pub struct ScriptedGeocoder {
    places: HashMap<String, Coordinate>,
    lookups: Arc<AtomicUsize>,
}

impl ScriptedGeocoder {
    pub fn place(mut self, address: &str, location: Coordinate) -> Self {
        self.places.insert(address.to_string(), location);
        self
    }

    /// Shared lookup counter; stays readable after the geocoder moves into the app.
    pub fn lookups(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.lookups)
    }
}

#[async_trait]
impl GeocodeProvider for ScriptedGeocoder {
    async fn resolve(&self, address: &str) -> Option<Coordinate> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.places.get(address).copied()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// App harness
// ─────────────────────────────────────────────────────────────────────────────

/// A router over scripted providers plus a handle on its catalog.
pub struct TestApp {
    pub router: Router,
    pub catalog: InMemoryGateCatalog,
}

impl TestApp {
    pub fn new(routes: ScriptedRoutes, geocoder: ScriptedGeocoder) -> Self {
        let catalog = InMemoryGateCatalog::new();
        let state = AppState::new(
            Arc::new(catalog.clone()),
            Arc::new(GateRankingEngine::new(Arc::new(routes))),
            Arc::new(geocoder),
        );
        Self {
            router: build_router(state),
            catalog,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::delete(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn json(&self, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        self.raw(method, uri, body.to_string()).await
    }

    pub async fn raw(&self, method: &str, uri: &str, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }
}
