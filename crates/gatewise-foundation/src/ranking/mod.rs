//! Gate ranking.

mod engine;

pub use engine::{GateRankingEngine, time_saved_seconds};
