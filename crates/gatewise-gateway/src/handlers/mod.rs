//! Request handlers for the gate API

pub mod eta;
pub mod gates;
pub mod health;
pub mod societies;

pub use eta::eta_router;
pub use gates::gates_router;
pub use health::health_router;
pub use societies::societies_router;

use crate::error::{ApiError, ApiResult};
use std::str::FromStr;

/// Parse an identifier taken from a path or query string.
pub(crate) fn parse_id<T: FromStr>(raw: &str, field: &str) -> ApiResult<T> {
    raw.parse()
        .map_err(|_| ApiError::InvalidRequest(format!("Invalid {field} format")))
}
