//! Human-readable rendering of travel durations and distances.

/// Placeholder rendered for values that cannot be displayed.
pub const UNAVAILABLE: &str = "Unavailable";

/// Render a duration as `"M min S sec"`.
///
/// Fractional seconds are truncated. Negative or non-finite input renders as
/// [`UNAVAILABLE`].
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return UNAVAILABLE.to_string();
    }
    let total = seconds.trunc() as u64;
    format!("{} min {} sec", total / 60, total % 60)
}

/// Render a distance in kilometres with one decimal place, e.g. `"4.2 km"`.
pub fn format_distance(meters: f64) -> String {
    if !meters.is_finite() || meters < 0.0 {
        return UNAVAILABLE.to_string();
    }
    format!("{:.1} km", meters / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_split_into_minutes_and_seconds() {
        assert_eq!(format_duration(0.0), "0 min 0 sec");
        assert_eq!(format_duration(120.0), "2 min 0 sec");
        assert_eq!(format_duration(330.0), "5 min 30 sec");
        assert_eq!(format_duration(4210.0), "70 min 10 sec");
        assert_eq!(format_duration(59.9), "0 min 59 sec");
    }

    #[test]
    fn unusable_durations_are_unavailable() {
        assert_eq!(format_duration(-1.0), UNAVAILABLE);
        assert_eq!(format_duration(f64::NAN), UNAVAILABLE);
        assert_eq!(format_duration(f64::INFINITY), UNAVAILABLE);
    }

    #[test]
    fn distances_render_in_kilometres() {
        assert_eq!(format_distance(4230.0), "4.2 km");
        assert_eq!(format_distance(950.0), "0.9 km");
        assert_eq!(format_distance(0.0), "0.0 km");
        assert_eq!(format_distance(f64::NAN), UNAVAILABLE);
    }
}
