//! `gatewise-gateway`: HTTP front end for gate recommendations.
//!
//! The service answers "which gate of this facility should I drive to?" by
//! asking a traffic-aware routing provider for the time to every active gate
//! and ranking the answers.
//!
//! | Piece | Type |
//! |-------|------|
//! | Storage | [`GateCatalog`](gatewise_kernel::GateCatalog), served by `InMemoryGateCatalog` |
//! | Ranking | [`GateRankingEngine`](gatewise_foundation::GateRankingEngine) |
//! | Location lookup | [`GeocodeProvider`](gatewise_kernel::GeocodeProvider), served by `GoogleGeocoder` |
//!
//! [`server::build_router`] assembles the axum service over any [`AppState`],
//! which is how the integration tests run it with scripted providers.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use gatewise_gateway::config::ServiceConfig;
//! use gatewise_gateway::server::GateServer;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServiceConfig::load().expect("valid configuration");
//!     GateServer::new(config).start().await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;
