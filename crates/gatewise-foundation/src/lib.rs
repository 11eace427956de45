//! `gatewise-foundation`: Concrete implementations of the kernel contracts.
//!
//! | Kernel contract | Implementation |
//! |----------------|----------------|
//! | [`RouteTimeProvider`](gatewise_kernel::RouteTimeProvider) | [`routing::GoogleRoutesProvider`] |
//! | [`GeocodeProvider`](gatewise_kernel::GeocodeProvider) | [`routing::GoogleGeocoder`] |
//! | [`GateCatalog`](gatewise_kernel::GateCatalog) | [`catalog::InMemoryGateCatalog`] |
//!
//! [`ranking::GateRankingEngine`] consumes a `RouteTimeProvider` and turns a
//! list of gates into a ranked ETA list or a single recommendation.

pub mod catalog;
pub mod ranking;
pub mod routing;

pub use catalog::InMemoryGateCatalog;
pub use ranking::GateRankingEngine;
pub use routing::{GoogleGeocoder, GoogleRoutesProvider, MAX_DEPARTURE_OFFSET_SECS, ProviderConfig};
