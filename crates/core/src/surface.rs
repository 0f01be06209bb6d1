use crate::{geometry::Rect, Result};
use std::time::Duration;

/// Presentation of the icon/shadow pair for one press state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressLook {
    /// `box-shadow` of the overlay layer.
    pub box_shadow: String,
    /// `fill` of the icon's tintable shape.
    pub fill: String,
}

/// Everything needed to build a button's layers inside its host.
#[derive(Debug, Clone)]
pub struct Layers {
    pub z_index:        i32,
    pub z_index_shadow: i32,
    pub border_radius:  String,
    /// Vector icon markup, appended first.
    pub icon_markup:    String,
    /// Id of the shape inside `icon_markup` that receives the fill.
    pub fill_target:    String,
}

/// Capability interface over whatever actually presents a button.
///
/// Widgets only talk to their host through this trait, so the press-state and
/// offset logic can run against an in-memory document as well as a real
/// rendering backend.  Every setter declares a target value plus the
/// transition to reach it; the backend owns the animation.
pub trait ButtonSurface {
    /// Id of the host element this surface is bound to.
    fn host_id(&self) -> &str;

    /// Style the host and append the icon, then the shadow overlay.
    fn mount(&mut self, layers: &Layers) -> Result<()>;

    /// Fade in over `fade`; visibility flips immediately.
    fn show(&mut self, fade: Duration);

    /// Fade out over `fade`; visibility flips to hidden after `delay`.
    fn hide(&mut self, fade: Duration, delay: Duration);

    /// Currently declared right inset in px.
    fn right_inset(&self) -> Result<i32>;

    /// Declare a new right inset, animated over `duration`.
    fn translate(&mut self, right: i32, duration: Duration);

    /// Apply the shadow and fill for a press state over `duration`.
    fn set_pressed(&mut self, look: &PressLook, duration: Duration);

    /// Current on-screen box of the icon layer.
    fn icon_bounds(&self) -> Rect;
}
