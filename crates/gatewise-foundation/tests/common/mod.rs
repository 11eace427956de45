//! Common test utilities shared across all `gatewise-foundation` integration tests.
//!
//! This module is **not** a standalone test binary.  It is declared with
//! `mod common;` inside each integration test file that needs it.

#![allow(dead_code)]

pub mod stub_provider;

use chrono::Utc;
use gatewise_kernel::{Coordinate, Gate, GateId, SocietyId};

pub fn at(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng).expect("test coordinate in range")
}

/// An active gate of `society` at `(lat, lng)`.
pub fn gate(society: SocietyId, name: &str, lat: f64, lng: f64) -> Gate {
    Gate {
        id: GateId::new(),
        name: name.to_string(),
        location: at(lat, lng),
        society_id: society,
        is_active: true,
        created_at: Utc::now(),
    }
}
