use crate::geometry::Point;

/// Which of the two page buttons an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Top,
    Bottom,
}

/// Raw pointer input delivered to a single button.
///
/// Touch and mouse are kept apart because only touch movement is checked
/// against the icon bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    TouchStart,
    /// First touch point, in viewport coordinates.
    TouchMove(Point),
    MouseDown,
    MouseUp,
    MouseLeave,
    /// Activation (a full press/release inside the button).
    Click,
}

/// All messages that can flow through the page event loop.
#[derive(Debug, Clone)]
pub enum Message {
    // ── Input ─────────────────────────────────────────────────────────────────
    /// Pointer input on one of the buttons.
    Pointer(ButtonId, PointerEvent),
    /// A finger moved anywhere on the surface, in viewport coordinates.
    TouchMoved(Point),

    // ── Page lifecycle ────────────────────────────────────────────────────────
    /// The page finished building; click bindings may be armed.
    PageReady,
    /// Config file changed on disk; triggers a live recolor.
    ConfigReloaded,

    // ── Internal ──────────────────────────────────────────────────────────────
    /// Animation frame; advances the document clock.
    Tick,
}
