//! Latitude/longitude values and their validation.
//!
//! A [`Coordinate`] can only be obtained through [`Coordinate::new`],
//! [`parse_coordinate_pair`] or deserialization, all of which run the same
//! range checks, so every value in circulation is known to be on the globe.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// `<number>,<number>`: optional sign, optional decimal part, no inner spaces.
static COORDINATE_PAIR_RE: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[+-]?\d+(\.\d+)?,[+-]?\d+(\.\d+)?$").unwrap()
});

pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Input validation failures. All of them are user-correctable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// The text is not a `latitude,longitude` pair.
    #[error("invalid coordinates format '{0}', use \"latitude,longitude\"")]
    InvalidFormat(String),

    /// A component lies outside its allowed range.
    #[error("{axis} must be between {min} and {max}, got {value}")]
    OutOfRange {
        axis: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    /// A component is missing or not a number.
    #[error("invalid latitude or longitude value")]
    InvalidValue,
}

/// Immutable WGS84 point. Serialized as `{"lat": .., "lng": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoordinateError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.lat, raw.lng)
    }
}

impl Coordinate {
    /// Build a coordinate, rejecting `NaN` and out-of-range components.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        validate(lat, lng)?;
        Ok(Self { lat, lng })
    }

    /// Build a coordinate from components that may be absent.
    pub fn from_parts(lat: Option<f64>, lng: Option<f64>) -> Result<Self, CoordinateError> {
        match (lat, lng) {
            (Some(lat), Some(lng)) => Self::new(lat, lng),
            _ => Err(CoordinateError::InvalidValue),
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Display for Coordinate {
    /// Renders the `lat,lng` form accepted by [`parse_coordinate_pair`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Range-check a latitude/longitude pair.
pub fn validate(lat: f64, lng: f64) -> Result<(), CoordinateError> {
    if lat.is_nan() || lng.is_nan() {
        return Err(CoordinateError::InvalidValue);
    }
    check_axis("latitude", lat, LATITUDE_RANGE)?;
    check_axis("longitude", lng, LONGITUDE_RANGE)
}

fn check_axis(axis: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), CoordinateError> {
    if value < min || value > max {
        return Err(CoordinateError::OutOfRange {
            axis,
            min,
            max,
            value,
        });
    }
    Ok(())
}

/// Whether `text` (after trimming) has the shape of a coordinate pair.
///
/// Used by callers to decide between parsing and geocoding a free-text
/// location.
pub fn looks_like_coordinate_pair(text: &str) -> bool {
    COORDINATE_PAIR_RE.is_match(text.trim())
}

/// Parse a strict `latitude,longitude` string.
pub fn parse_coordinate_pair(text: &str) -> Result<Coordinate, CoordinateError> {
    let trimmed = text.trim();
    if !COORDINATE_PAIR_RE.is_match(trimmed) {
        return Err(CoordinateError::InvalidFormat(trimmed.to_string()));
    }
    let (lat, lng) = trimmed
        .split_once(',')
        .ok_or_else(|| CoordinateError::InvalidFormat(trimmed.to_string()))?;
    let lat: f64 = lat
        .parse()
        .map_err(|_| CoordinateError::InvalidFormat(trimmed.to_string()))?;
    let lng: f64 = lng
        .parse()
        .map_err(|_| CoordinateError::InvalidFormat(trimmed.to_string()))?;
    Coordinate::new(lat, lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_pair() {
        let c = parse_coordinate_pair("12.9,77.6").unwrap();
        assert_eq!(c.lat(), 12.9);
        assert_eq!(c.lng(), 77.6);
    }

    #[test]
    fn parses_signed_and_integer_components() {
        let c = parse_coordinate_pair("  -33,+151.2093 ").unwrap();
        assert_eq!(c.lat(), -33.0);
        assert_eq!(c.lng(), 151.2093);
    }

    #[test]
    fn rejects_text_that_is_not_a_pair() {
        for bad in ["abc", "12.9", "12.9, 77.6", "12.9,77.6,1", "1e3,2", ".5,1", ""] {
            assert!(
                matches!(parse_coordinate_pair(bad), Err(CoordinateError::InvalidFormat(_))),
                "expected InvalidFormat for {bad:?}"
            );
        }
    }

    #[test]
    fn parse_reports_out_of_range() {
        let err = parse_coordinate_pair("91,0").unwrap_err();
        assert!(matches!(err, CoordinateError::OutOfRange { axis: "latitude", .. }));
        let err = parse_coordinate_pair("0,-180.5").unwrap_err();
        assert!(matches!(err, CoordinateError::OutOfRange { axis: "longitude", .. }));
    }

    #[test]
    fn validate_accepts_the_closed_ranges() {
        for (lat, lng) in [(-90.0, -180.0), (90.0, 180.0), (0.0, 0.0), (45.5, -122.6)] {
            assert!(validate(lat, lng).is_ok(), "({lat}, {lng}) should be valid");
        }
    }

    #[test]
    fn validate_rejects_values_outside_either_range() {
        for (lat, lng) in [(90.0001, 0.0), (-91.0, 0.0), (0.0, 180.0001), (0.0, -200.0)] {
            assert!(matches!(
                validate(lat, lng),
                Err(CoordinateError::OutOfRange { .. })
            ));
        }
        assert!(matches!(
            validate(f64::INFINITY, 0.0),
            Err(CoordinateError::OutOfRange { .. })
        ));
    }

    #[test]
    fn nan_and_missing_are_invalid_values() {
        assert_eq!(validate(f64::NAN, 0.0), Err(CoordinateError::InvalidValue));
        assert_eq!(
            Coordinate::from_parts(Some(1.0), None),
            Err(CoordinateError::InvalidValue)
        );
    }

    #[test]
    fn display_round_trips_through_the_parser() {
        let c = Coordinate::new(13.0359, 77.6208).unwrap();
        assert_eq!(c.to_string(), "13.0359,77.6208");
        assert_eq!(parse_coordinate_pair(&c.to_string()).unwrap(), c);
    }

    #[test]
    fn deserialization_enforces_ranges() {
        let ok: Coordinate = serde_json::from_str(r#"{"lat": 1.5, "lng": 2.5}"#).unwrap();
        assert_eq!(ok, Coordinate::new(1.5, 2.5).unwrap());
        assert!(serde_json::from_str::<Coordinate>(r#"{"lat": 100, "lng": 0}"#).is_err());
    }

    #[test]
    fn shape_check_ignores_surrounding_whitespace() {
        assert!(looks_like_coordinate_pair(" 12.9,77.6 "));
        assert!(!looks_like_coordinate_pair("Manyata Tech Park, Bengaluru"));
    }
}
