/// Parse the leading integer of a CSS value, the way `parseInt` does.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit, so `"31.8px"` reads as `31`.  Returns `None` when no digit
/// follows.
pub fn parse_integer(value: &str) -> Option<i32> {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    let n = if negative { -magnitude } else { magnitude };
    i32::try_from(n).ok()
}

/// Format a pixel count as a CSS length.
#[inline]
pub fn format_px(px: i32) -> String {
    format!("{px}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_integer_px() {
        assert_eq!(parse_integer("16px"), Some(16));
        assert_eq!(parse_integer("-69px"), Some(-69));
        assert_eq!(parse_integer("  +7"), Some(7));
    }

    #[test]
    fn parse_integer_truncates_fraction() {
        assert_eq!(parse_integer("31.8px"), Some(31));
        assert_eq!(parse_integer("-0.5px"), Some(0));
    }

    #[test]
    fn parse_integer_rejects_non_numeric() {
        assert_eq!(parse_integer("auto"), None);
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("-px"), None);
    }

    #[test]
    fn format_px_round_trips_sign() {
        assert_eq!(format_px(-69), "-69px");
        assert_eq!(format_px(31), "31px");
    }
}
