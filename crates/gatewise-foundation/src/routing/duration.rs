//! Normalisation of provider duration tokens to whole seconds.
//!
//! Two shapes are accepted:
//!
//! - ISO-8601 time designators, `PT[nH][nM][nS]` (e.g. `PT2H5M`);
//! - protobuf JSON durations, `<seconds>s` (e.g. `45s`, `45.5s`).
//!
//! Fractional seconds are truncated.

use gatewise_kernel::RouteFailure;
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DURATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$").unwrap());
static SECONDS_DURATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)(?:\.\d+)?s$").unwrap());

/// Parse a duration token into seconds.
pub fn parse_duration_token(token: &str) -> Result<u64, RouteFailure> {
    let token = token.trim();
    let malformed = || RouteFailure::MalformedResponse(format!("unexpected duration format: '{token}'"));

    if let Some(caps) = ISO_DURATION_RE.captures(token) {
        // `PT` on its own carries no components.
        if caps.iter().skip(1).all(|c| c.is_none()) {
            return Err(malformed());
        }
        let mut total: u64 = 0;
        for (idx, unit) in [3600u64, 60, 1].into_iter().enumerate() {
            let Some(part) = caps.get(idx + 1) else {
                continue;
            };
            let value: u64 = part.as_str().parse().map_err(|_| malformed())?;
            total = value
                .checked_mul(unit)
                .and_then(|v| total.checked_add(v))
                .ok_or_else(malformed)?;
        }
        return Ok(total);
    }

    if let Some(caps) = SECONDS_DURATION_RE.captures(token) {
        return caps[1].parse().map_err(|_| malformed());
    }

    Err(malformed())
}
