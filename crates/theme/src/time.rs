use std::time::Duration;

/// Parse a CSS time value (`0.3s`, `150ms`, bare `0`), to millisecond precision.
pub fn parse_time(s: &str) -> Option<Duration> {
    let s = s.trim();
    let millis = if let Some(ms) = s.strip_suffix("ms") {
        ms.trim().parse::<f64>().ok()?
    } else if let Some(sec) = s.strip_suffix('s') {
        sec.trim().parse::<f64>().ok()? * 1000.0
    } else if s == "0" {
        0.0
    } else {
        return None;
    };
    if !millis.is_finite() || millis < 0.0 {
        return None;
    }
    Some(Duration::from_millis(millis.round() as u64))
}

/// Format a duration as a CSS time value in milliseconds.
pub fn format_time(d: Duration) -> String {
    format!("{}ms", d.as_millis())
}
