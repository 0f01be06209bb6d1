use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `scroll-to.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Theme tokens, as CSS-style strings.
    pub theme: ThemeConfig,
    /// Host element ids of the two buttons.
    pub buttons: ButtonsConfig,
    /// Click behaviour between the two buttons.
    pub wiring: WiringConfig,
    /// Viewport and host geometry of the page the buttons live on.
    pub page: PageConfig,
}

/// Theme / styling configuration.
///
/// Values are kept as strings so they can be written verbatim into the root
/// style scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Default transition duration, e.g. `"0.3s"`.
    pub transition_duration: String,
    /// Delay before a hidden button stops being visible, e.g. `"0.3s"`.
    pub transition_delay: String,
    /// Corner radius of the icon and shadow layers.
    pub border_radius: String,
    /// Shadow of the overlay layer; `inset` is appended while pressed.
    pub box_shadow: String,
    /// Fill of the icon while released.
    pub main_color: String,
    /// Fill of the icon while pressed.
    pub accent_color: String,
    /// Stacking order of the button and its icon.
    pub z_index: i32,
    /// Stacking order of the shadow overlay.
    pub z_index_shadow: i32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            transition_duration: "0.3s".to_string(),
            transition_delay:    "0.3s".to_string(),
            border_radius:       "8px".to_string(),
            box_shadow:          "0 0 8px rgba(0, 0, 0, 0.4)".to_string(),
            main_color:          "rgba(0, 0, 0, 0.3)".to_string(),
            accent_color:        "rgba(255, 140, 0, 0.6)".to_string(),
            z_index:             100,
            z_index_shadow:      101,
        }
    }
}

/// Host element ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonsConfig {
    pub top:    String,
    pub bottom: String,
}

impl Default for ButtonsConfig {
    fn default() -> Self {
        Self {
            top:    "scroll-to-top-button".to_string(),
            bottom: "scroll-to-bottom-button".to_string(),
        }
    }
}

/// Page-level click wiring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WiringConfig {
    /// Distance (px) both buttons slide when either one is clicked.
    pub offset: i32,
}

impl Default for WiringConfig {
    fn default() -> Self {
        Self { offset: 100 }
    }
}

/// Geometry of the page surface and the two host elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Window inner width in px, scrollbar included.
    pub width: u32,
    pub height: u32,
    /// Width of the vertical scrollbar the buttons must clear.
    pub scrollbar_width: u32,
    pub top: HostLayout,
    pub bottom: HostLayout,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width:           240,
            height:          320,
            scrollbar_width: 15,
            top:    HostLayout { right: 16, bottom: 173, width: 58, height: 86 },
            bottom: HostLayout { right: 16, bottom: 58,  width: 58, height: 86 },
        }
    }
}

/// Fixed-position box of a host element, measured from the bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostLayout {
    pub right:  i32,
    pub bottom: i32,
    pub width:  u32,
    pub height: u32,
}
