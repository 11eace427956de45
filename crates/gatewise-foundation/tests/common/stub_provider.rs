//! Scripted [`RouteTimeProvider`] for ranking tests.
//!
//! [`StubRouteProvider`] answers by destination: each gate location is mapped
//! to a canned outcome at build time, and unknown destinations get
//! [`RouteFailure::NoRouteFound`].  An optional per-call delay (combined with
//! tokio's paused clock) makes the fan-out observable: the provider tracks how
//! many calls were in flight at once.

use async_trait::async_trait;
use gatewise_kernel::{Coordinate, RouteEstimate, RouteFailure, RouteTimeProvider};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Clone)]
enum Scripted {
    Answer(Result<RouteEstimate, RouteFailure>),
    Sleep(Duration),
    Panic,
}

pub struct StubRouteProvider {
    scripts: HashMap<String, Scripted>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

#[derive(Default)]
pub struct StubRouteProviderBuilder {
    scripts: HashMap<String, Scripted>,
    delay: Option<Duration>,
}

impl StubRouteProviderBuilder {
    /// Answer calls to `destination` with a full estimate.
    pub fn route(mut self, destination: Coordinate, secs: u64, meters: u64) -> Self {
        self.scripts.insert(
            destination.to_string(),
            Scripted::Answer(Ok(RouteEstimate::new(secs, meters))),
        );
        self
    }

    /// Answer calls to `destination` with a duration but no distance.
    pub fn route_without_distance(mut self, destination: Coordinate, secs: u64) -> Self {
        self.scripts.insert(
            destination.to_string(),
            Scripted::Answer(Ok(RouteEstimate::without_distance(secs))),
        );
        self
    }

    pub fn fail(mut self, destination: Coordinate, failure: RouteFailure) -> Self {
        self.scripts
            .insert(destination.to_string(), Scripted::Answer(Err(failure)));
        self
    }

    /// Never answer within `wait` for `destination` (answers `NoRouteFound` afterwards).
    pub fn hang(mut self, destination: Coordinate, wait: Duration) -> Self {
        self.scripts
            .insert(destination.to_string(), Scripted::Sleep(wait));
        self
    }

    pub fn panic_on(mut self, destination: Coordinate) -> Self {
        self.scripts.insert(destination.to_string(), Scripted::Panic);
        self
    }

    /// Delay every answer by `delay`.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn build(self) -> StubRouteProvider {
        StubRouteProvider {
            scripts: self.scripts,
            delay: self.delay,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }
}

impl StubRouteProvider {
    pub fn builder() -> StubRouteProviderBuilder {
        StubRouteProviderBuilder::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RouteTimeProvider for StubRouteProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn estimate(
        &self,
        _origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RouteEstimate, RouteFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let script = self.scripts.get(&destination.to_string()).cloned();
        let outcome = match script {
            Some(Scripted::Answer(outcome)) => outcome,
            Some(Scripted::Sleep(wait)) => {
                tokio::time::sleep(wait).await;
                Err(RouteFailure::NoRouteFound)
            }
            Some(Scripted::Panic) => panic!("scripted provider panic for {destination}"),
            None => Err(RouteFailure::NoRouteFound),
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        outcome
    }
}
