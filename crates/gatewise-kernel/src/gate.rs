//! Gate and society records.
//!
//! These are owned by the storage collaborator ([`GateCatalog`](crate::GateCatalog));
//! the ranking engine only ever reads them.

use crate::geo::Coordinate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim()).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

opaque_id!(
    /// Identifier of a [`Gate`].
    GateId
);
opaque_id!(
    /// Identifier of a [`Society`].
    SocietyId
);

/// A facility entry point with a fixed location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gate {
    pub id: GateId,
    pub name: String,
    pub location: Coordinate,
    pub society_id: SocietyId,
    /// Only active gates are eligible for ranking.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// The facility or complex that owns a set of gates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Society {
    pub id: SocietyId,
    pub name: String,
    pub area: String,
    /// Polygon rings of `[lng, lat]` positions (GeoJSON order).
    pub boundary: Vec<Vec<[f64; 2]>>,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a [`Gate`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewGate {
    pub name: String,
    pub location: Coordinate,
    pub society_id: SocietyId,
    pub is_active: bool,
}

impl NewGate {
    /// New gates start out active.
    pub fn new(name: impl Into<String>, location: Coordinate, society_id: SocietyId) -> Self {
        Self {
            name: name.into(),
            location,
            society_id,
            is_active: true,
        }
    }

    /// Builder: set the initial active flag.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// Fields required to create a [`Society`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewSociety {
    pub name: String,
    pub area: String,
    pub boundary: Vec<Vec<[f64; 2]>>,
}

/// Partial update of a gate; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GatePatch {
    pub name: Option<String>,
    pub location: Option<Coordinate>,
    pub is_active: Option<bool>,
}

impl GatePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none() && self.is_active.is_none()
    }

    /// Apply the patch to `gate` in place.
    pub fn apply_to(&self, gate: &mut Gate) {
        if let Some(name) = &self.name {
            gate.name = name.clone();
        }
        if let Some(location) = self.location {
            gate.location = location;
        }
        if let Some(is_active) = self.is_active {
            gate.is_active = is_active;
        }
    }
}
