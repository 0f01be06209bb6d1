use scroll_theme::{parse_time, Color};
use std::time::{Duration, Instant};

/// One entry of a `transition` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Property name, or `all`.
    pub property: String,
    pub duration: Duration,
    pub delay:    Duration,
}

/// Parse `prop <duration> [delay], …`.  Malformed entries are skipped.
pub fn parse_transitions(raw: &str) -> Vec<Transition> {
    raw.split(',')
        .filter_map(|item| {
            let mut parts = item.split_whitespace();
            let property = parts.next()?.to_string();
            let duration = parts.next().and_then(parse_time).unwrap_or(Duration::ZERO);
            let delay = parts.next().and_then(parse_time).unwrap_or(Duration::ZERO);
            Some(Transition { property, duration, delay })
        })
        .collect()
}

/// Transition that applies to `property`, if any.  Later entries win.
pub fn transition_for<'a>(list: &'a [Transition], property: &str) -> Option<&'a Transition> {
    list.iter()
        .rev()
        .find(|t| t.property == property || t.property == "all")
}

/// An inline style value, possibly still animating from a previous one.
#[derive(Debug, Clone)]
pub struct Declared {
    pub to:       String,
    pub from:     Option<String>,
    pub start:    Instant,
    pub duration: Duration,
    pub delay:    Duration,
}

impl Declared {
    /// Set `to` without animation.
    pub fn instant(to: impl Into<String>, now: Instant) -> Self {
        Self {
            to: to.into(),
            from: None,
            start: now,
            duration: Duration::ZERO,
            delay: Duration::ZERO,
        }
    }

    /// Value at `now`.
    ///
    /// Numbers, px lengths and colours interpolate linearly; anything else
    /// holds its old value and flips once the transition ends.
    pub fn value_at(&self, now: Instant) -> String {
        let Some(from) = &self.from else {
            return self.to.clone();
        };

        let elapsed = now.saturating_duration_since(self.start);
        if elapsed < self.delay {
            return from.clone();
        }
        let running = elapsed - self.delay;
        if running >= self.duration {
            return self.to.clone();
        }

        let progress = (running.as_nanos() as f64 / self.duration.as_nanos() as f64) as f32;
        interpolate(from, &self.to, progress).unwrap_or_else(|| from.clone())
    }

    /// Whether the value is still changing at `now`.
    pub fn is_running(&self, now: Instant) -> bool {
        self.from.is_some() && now.saturating_duration_since(self.start) < self.delay + self.duration
    }
}

fn interpolate(from: &str, to: &str, t: f32) -> Option<String> {
    let lerp = |a: f32, b: f32| a + (b - a) * t;

    if let (Some((a, unit_a)), Some((b, unit_b))) = (split_number(from), split_number(to)) {
        if unit_a == unit_b {
            return Some(format!("{}{unit_a}", lerp(a, b)));
        }
        return None;
    }

    let (a, b) = (Color::parse(from)?, Color::parse(to)?);
    let c = Color {
        r: lerp(a.r, b.r),
        g: lerp(a.g, b.g),
        b: lerp(a.b, b.b),
        a: lerp(a.a, b.a),
    };
    Some(c.to_string())
}

/// `"16px"` → `(16.0, "px")`, `"0.5"` → `(0.5, "")`.
pub fn split_number(value: &str) -> Option<(f32, &str)> {
    let value = value.trim();
    let (num, unit) = match value.strip_suffix("px") {
        Some(n) => (n, "px"),
        None => (value, ""),
    };
    num.parse().ok().map(|n| (n, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multi_entry_transition() {
        let list = parse_transitions("opacity 300ms, visibility 0s 300ms");
        assert_eq!(list.len(), 2);
        let vis = transition_for(&list, "visibility").unwrap();
        assert_eq!(vis.duration, Duration::ZERO);
        assert_eq!(vis.delay, Duration::from_millis(300));
        assert!(transition_for(&list, "right").is_none());
    }

    #[test]
    fn lengths_interpolate() {
        let t0 = Instant::now();
        let d = Declared {
            to: "0px".into(),
            from: Some("100px".into()),
            start: t0,
            duration: Duration::from_millis(100),
            delay: Duration::ZERO,
        };
        assert_eq!(d.value_at(t0), "100px");
        assert_eq!(d.value_at(t0 + Duration::from_millis(50)), "50px");
        assert_eq!(d.value_at(t0 + Duration::from_millis(100)), "0px");
        assert!(!d.is_running(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn keywords_flip_after_delay() {
        let t0 = Instant::now();
        let d = Declared {
            to: "hidden".into(),
            from: Some("visible".into()),
            start: t0,
            duration: Duration::ZERO,
            delay: Duration::from_millis(300),
        };
        assert_eq!(d.value_at(t0 + Duration::from_millis(299)), "visible");
        assert_eq!(d.value_at(t0 + Duration::from_millis(300)), "hidden");
    }

    #[test]
    fn colours_interpolate() {
        let t0 = Instant::now();
        let d = Declared {
            to: "rgba(255, 255, 255, 1)".into(),
            from: Some("rgba(0, 0, 0, 1)".into()),
            start: t0,
            duration: Duration::from_millis(100),
            delay: Duration::ZERO,
        };
        assert_eq!(d.value_at(t0 + Duration::from_millis(50)), "rgba(128, 128, 128, 1)");
    }
}
