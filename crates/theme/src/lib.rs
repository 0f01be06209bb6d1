pub mod colors;
pub mod shadow;
pub mod time;

pub use colors::Color;
pub use shadow::BoxShadow;
pub use time::{format_time, parse_time};

use scroll_config::ThemeConfig;
use scroll_core::PressLook;
use scroll_metrics::{root_value, PlatformMetrics};
use std::time::Duration;
use tracing::warn;

/// Names of the root-scope properties the theme reads and publishes.
pub mod props {
    pub const Z_INDEX:             &str = "--scroll-to-button-z-index";
    pub const Z_INDEX_SHADOW:      &str = "--scroll-to-button-z-index-shadow";
    pub const TRANSITION_DURATION: &str = "--default-transition-duration";
    pub const TRANSITION_DELAY:    &str = "--default-transition-delay";
    pub const BORDER_RADIUS:       &str = "--default-border-radius";
    pub const BOX_SHADOW:          &str = "--default-box-shadow";
    pub const MAIN_COLOR:          &str = "--transparent-main-color";
    pub const ACCENT_COLOR:        &str = "--transparent-accent-color";
}

const FALLBACK_DURATION: Duration = Duration::from_millis(300);
const FALLBACK_RADIUS:   &str = "8px";
const FALLBACK_SHADOW:   &str = "0 0 8px rgba(0, 0, 0, 0.4)";

/// Compiled button theme.
///
/// Immutable once built: widgets hold a clone and a live recolor replaces the
/// whole value.  Building never fails; a token that doesn't parse is logged
/// and replaced by a built-in default.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonTheme {
    pub transition_duration: Duration,
    /// How long a hidden button keeps its visibility while fading out.
    pub transition_delay:    Duration,
    pub border_radius:       String,
    /// Outer shadow of the overlay; pressed buttons use it `inset`.
    pub box_shadow:          String,
    /// Released fill.
    pub main_color:          Color,
    /// Pressed fill.
    pub accent_color:        Color,
    pub z_index:             i32,
    pub z_index_shadow:      i32,
}

impl ButtonTheme {
    /// Build a [`ButtonTheme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            transition_duration: time_or(&cfg.transition_duration, "transition_duration"),
            transition_delay:    time_or(&cfg.transition_delay, "transition_delay"),
            border_radius:       radius_or(&cfg.border_radius),
            box_shadow:          shadow_or(&cfg.box_shadow),
            main_color:   color_or(&cfg.main_color, "main_color", Color::BLACK.with_alpha(0.3)),
            accent_color: color_or(&cfg.accent_color, "accent_color", Color::from_rgba8(255, 140, 0, 0.6)),
            z_index:        cfg.z_index,
            z_index_shadow: cfg.z_index_shadow,
        }
    }

    /// Overlay whatever the root style scope declares on top of `base`.
    ///
    /// Unset root properties keep `base`'s value, so a page that declares
    /// only an accent colour still gets a complete theme.
    pub fn from_root(metrics: &impl PlatformMetrics, base: &Self) -> Self {
        let get = |name: &str| root_value(metrics, name);
        let int = |name: &str, current: i32| {
            get(name)
                .and_then(|v| scroll_metrics::parse_integer(&v))
                .unwrap_or(current)
        };

        Self {
            transition_duration: get(props::TRANSITION_DURATION)
                .map(|v| time_or(&v, props::TRANSITION_DURATION))
                .unwrap_or(base.transition_duration),
            transition_delay: get(props::TRANSITION_DELAY)
                .map(|v| time_or(&v, props::TRANSITION_DELAY))
                .unwrap_or(base.transition_delay),
            border_radius: get(props::BORDER_RADIUS)
                .map(|v| radius_or(&v))
                .unwrap_or_else(|| base.border_radius.clone()),
            box_shadow: get(props::BOX_SHADOW)
                .map(|v| shadow_or(&v))
                .unwrap_or_else(|| base.box_shadow.clone()),
            main_color: get(props::MAIN_COLOR)
                .map(|v| color_or(&v, props::MAIN_COLOR, base.main_color))
                .unwrap_or(base.main_color),
            accent_color: get(props::ACCENT_COLOR)
                .map(|v| color_or(&v, props::ACCENT_COLOR, base.accent_color))
                .unwrap_or(base.accent_color),
            z_index:        int(props::Z_INDEX, base.z_index),
            z_index_shadow: int(props::Z_INDEX_SHADOW, base.z_index_shadow),
        }
    }

    /// Write every token into the root style scope.
    pub fn publish(&self, metrics: &mut impl PlatformMetrics) {
        metrics.set_root_property(props::TRANSITION_DURATION, &format_time(self.transition_duration));
        metrics.set_root_property(props::TRANSITION_DELAY, &format_time(self.transition_delay));
        metrics.set_root_property(props::BORDER_RADIUS, &self.border_radius);
        metrics.set_root_property(props::BOX_SHADOW, &self.box_shadow);
        metrics.set_root_property(props::MAIN_COLOR, &self.main_color.to_string());
        metrics.set_root_property(props::ACCENT_COLOR, &self.accent_color.to_string());
        metrics.set_root_property(props::Z_INDEX, &self.z_index.to_string());
        metrics.set_root_property(props::Z_INDEX_SHADOW, &self.z_index_shadow.to_string());
    }

    /// Shadow and fill for the given press state.
    pub fn look(&self, pressed: bool) -> PressLook {
        if pressed {
            PressLook {
                box_shadow: format!("{} inset", self.box_shadow),
                fill:       self.accent_color.to_string(),
            }
        } else {
            PressLook {
                box_shadow: self.box_shadow.clone(),
                fill:       self.main_color.to_string(),
            }
        }
    }
}

impl Default for ButtonTheme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

// ── Token fallbacks ───────────────────────────────────────────────────────────

fn time_or(raw: &str, what: &str) -> Duration {
    parse_time(raw).unwrap_or_else(|| {
        warn!("Invalid {what} '{raw}'; using {}", format_time(FALLBACK_DURATION));
        FALLBACK_DURATION
    })
}

fn radius_or(raw: &str) -> String {
    if shadow::parse_length(raw.trim()).is_some() {
        raw.trim().to_string()
    } else {
        warn!("Invalid border radius '{raw}'; using {FALLBACK_RADIUS}");
        FALLBACK_RADIUS.to_string()
    }
}

fn shadow_or(raw: &str) -> String {
    match BoxShadow::parse(raw) {
        Some(s) if !s.inset => raw.trim().to_string(),
        _ => {
            warn!("Invalid box shadow '{raw}'; using '{FALLBACK_SHADOW}'");
            FALLBACK_SHADOW.to_string()
        }
    }
}

fn color_or(raw: &str, what: &str, fallback: Color) -> Color {
    Color::parse(raw).unwrap_or_else(|| {
        warn!("Invalid {what} '{raw}'; using {fallback}");
        fallback
    })
}
