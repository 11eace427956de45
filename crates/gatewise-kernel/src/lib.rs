//! `gatewise-kernel`: Contracts for the gate-ranking service.
//!
//! This crate holds the value types, trait interfaces and pure functions shared
//! by every other crate in the workspace.  No network I/O happens here; the
//! concrete providers and the ranking engine live in `gatewise-foundation`, the
//! HTTP surface in `gatewise-gateway`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              gatewise-kernel  (this crate)                  │
//! │  Coordinate + validation     duration / distance format     │
//! │  Gate / Society records      GateCatalog trait              │
//! │  RouteTimeProvider trait     GeocodeProvider trait          │
//! │  GateEta / Recommendation    RankingError                   │
//! └──────────────────────────┬──────────────────────────────────┘
//!                            │  depends on
//! ┌──────────────────────────▼──────────────────────────────────┐
//! │              gatewise-foundation                            │
//! │  GoogleRoutesProvider / GoogleGeocoder (reqwest)            │
//! │  GateRankingEngine (JoinSet fan-out)                        │
//! │  InMemoryGateCatalog                                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use gatewise_kernel::geo::parse_coordinate_pair;
//! use gatewise_kernel::format::format_duration;
//!
//! let here = parse_coordinate_pair("12.9,77.6").expect("valid pair");
//! assert_eq!(here.lat(), 12.9);
//! assert_eq!(format_duration(330.0), "5 min 30 sec");
//! ```

pub mod catalog;
#[cfg(feature = "config")]
pub mod config;
pub mod format;
pub mod gate;
pub mod geo;
pub mod ranking;
pub mod routing;

// ── Flat re-exports ────────────────────────────────────────────────────────

pub use catalog::{CatalogError, CatalogResult, GateCatalog};
pub use format::{UNAVAILABLE, format_distance, format_duration};
pub use gate::{Gate, GateId, GatePatch, NewGate, NewSociety, Society, SocietyId};
pub use geo::{Coordinate, CoordinateError, parse_coordinate_pair, validate};
pub use ranking::{GateEta, RankingError, Recommendation, RecommendedGate};
pub use routing::{GeocodeProvider, RouteEstimate, RouteFailure, RouteTimeProvider};
