//! Arrival time estimates from remaining distance at a fixed speed.

/// Average driving speed assumption for time estimation.
pub const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Rendered in place of an ETA that cannot be computed.
pub const PLACEHOLDER: &str = "—";

/// Minutes needed to cover `remaining_m` meters at `speed_kmh`.
///
/// A zero or negative speed yields a non-finite or negative result, which
/// [`format_eta`] renders as [`PLACEHOLDER`].
pub fn estimate_minutes(remaining_m: f64, speed_kmh: f64) -> f64 {
    let meters_per_minute = speed_kmh * 1000.0 / 60.0;
    remaining_m / meters_per_minute
}

/// Formats minutes as `"42 min"` below an hour and `"2h 15m"` above.
///
/// Hours are floored and the minute remainder is rounded, so 119.6 renders
/// as `"1h 60m"`.
pub fn format_eta(minutes: f64) -> String {
    if !minutes.is_finite() || minutes < 0.0 {
        return PLACEHOLDER.to_string();
    }
    if minutes < 60.0 {
        return format!("{} min", minutes.round() as u64);
    }
    let hours = (minutes / 60.0).floor();
    let rest = (minutes % 60.0).round();
    format!("{}h {}m", hours as u64, rest as u64)
}
