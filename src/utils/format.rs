//! Number formatting for user-facing replies

/// Format an area or price for display.
///
/// Uses the shortest representation that round-trips, so `50.0` renders as
/// `50` and `12.5` as `12.5`. Negative zero renders as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
