use crate::icon::{ButtonIcon, IconDocument};
use scroll_core::{ButtonSurface, Layers, PointerEvent, Result, ScrollError};
use scroll_theme::ButtonTheme;
use std::time::Duration;
use tracing::{debug, trace};

/// A floating scroll-to button bound to one host element.
///
/// Owns the press state and keeps the surface's shadow and fill in step with
/// it: pressed buttons show an inset shadow and the accent fill, released
/// ones the outer shadow and the main fill.
#[derive(Debug)]
pub struct ScrollToButton<S> {
    surface: S,
    icon:    IconDocument,
    theme:   ButtonTheme,
    pressed: bool,
}

impl<S: ButtonSurface> ScrollToButton<S> {
    /// Build the button inside `surface`'s host.
    ///
    /// The host is first shifted left by `scrollbar_width` so the button
    /// clears the scrollbar, then the icon and the shadow overlay are mounted
    /// and the released look is applied instantly.
    pub fn new(
        surface: S,
        icon: &ButtonIcon,
        theme: ButtonTheme,
        scrollbar_width: i32,
    ) -> Result<Self> {
        let icon = IconDocument::parse(&icon.markup, &icon.shape_id)?;

        let mut button = Self {
            surface,
            icon,
            theme,
            pressed: false,
        };

        button.translate_x_with(-scrollbar_width, Duration::ZERO)?;

        let layers = Layers {
            z_index:        button.theme.z_index,
            z_index_shadow: button.theme.z_index_shadow,
            border_radius:  button.theme.border_radius.clone(),
            icon_markup:    button.icon.markup().to_string(),
            fill_target:    button.icon.shape_id().to_string(),
        };
        button.surface.mount(&layers)?;
        button.apply_look(Duration::ZERO);

        debug!(
            "Mounted scroll button on '{}' (scrollbar {scrollbar_width}px)",
            button.surface.host_id()
        );
        Ok(button)
    }

    /// Fade in; the button becomes hit-testable immediately.
    pub fn show(&mut self) {
        self.surface.show(self.theme.transition_duration);
    }

    /// Fade out, staying visible for the theme delay so the fade can play.
    pub fn hide(&mut self) {
        self.surface
            .hide(self.theme.transition_duration, self.theme.transition_delay);
    }

    /// Slide by `delta` px over the theme's default duration.
    ///
    /// Positive deltas move the button toward the right edge (the right inset
    /// shrinks).
    pub fn translate_x(&mut self, delta: i32) -> Result<()> {
        self.translate_x_with(delta, self.theme.transition_duration)
    }

    /// Slide by `delta` px over `duration`.  Offsets accumulate: the new inset
    /// is computed from the currently declared one.
    ///
    /// Fails without moving when the new inset does not fit in an `i32`.
    pub fn translate_x_with(&mut self, delta: i32, duration: Duration) -> Result<()> {
        let right = self.surface.right_inset()?;
        let target = right.checked_sub(delta).ok_or_else(|| ScrollError::InvalidValue {
            property: "right".into(),
            value:    format!("{right}px - {delta}px"),
        })?;
        self.surface.translate(target, duration);
        trace!("'{}' right {right} -> {target}", self.surface.host_id());
        Ok(())
    }

    /// Feed one pointer event through the press-state machine.
    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::TouchStart | PointerEvent::MouseDown => {
                if !self.pressed {
                    self.set_pressed(true);
                }
            }
            PointerEvent::TouchMove(p) => {
                if !self.surface.icon_bounds().contains(p) {
                    self.set_pressed(false);
                }
            }
            PointerEvent::MouseUp | PointerEvent::MouseLeave => self.set_pressed(false),
            PointerEvent::Click => {}
        }
    }

    /// Swap in a new theme and repaint the current state without animation.
    pub fn apply_theme(&mut self, theme: ButtonTheme) {
        self.theme = theme;
        self.apply_look(Duration::ZERO);
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn host_id(&self) -> &str {
        self.surface.host_id()
    }

    pub fn theme(&self) -> &ButtonTheme {
        &self.theme
    }

    pub fn icon(&self) -> &IconDocument {
        &self.icon
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
        // Presses land instantly; releases ease back.
        let duration = if pressed {
            Duration::ZERO
        } else {
            self.theme.transition_duration
        };
        self.apply_look(duration);
    }

    fn apply_look(&mut self, duration: Duration) {
        let look = self.theme.look(self.pressed);
        self.surface.set_pressed(&look, duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scroll_core::{Point, PressLook, Rect};

    /// Records what the widget asks of its surface.
    #[derive(Debug, Default)]
    struct Recorder {
        right:    i32,
        mounted:  Option<Layers>,
        looks:    Vec<(PressLook, Duration)>,
        moves:    Vec<(i32, Duration)>,
        fades:    Vec<String>,
        bad_right: bool,
    }

    impl ButtonSurface for Recorder {
        fn host_id(&self) -> &str {
            "host"
        }
        fn mount(&mut self, layers: &Layers) -> Result<()> {
            self.mounted = Some(layers.clone());
            Ok(())
        }
        fn show(&mut self, fade: Duration) {
            self.fades.push(format!("show {fade:?}"));
        }
        fn hide(&mut self, fade: Duration, delay: Duration) {
            self.fades.push(format!("hide {fade:?} {delay:?}"));
        }
        fn right_inset(&self) -> Result<i32> {
            if self.bad_right {
                return Err(ScrollError::InvalidValue {
                    property: "right".into(),
                    value:    "auto".into(),
                });
            }
            Ok(self.right)
        }
        fn translate(&mut self, right: i32, duration: Duration) {
            self.right = right;
            self.moves.push((right, duration));
        }
        fn set_pressed(&mut self, look: &PressLook, duration: Duration) {
            self.looks.push((look.clone(), duration));
        }
        fn icon_bounds(&self) -> Rect {
            Rect::new(100.0, 100.0, 58.0, 86.0)
        }
    }

    fn build(right: i32) -> ScrollToButton<Recorder> {
        let surface = Recorder { right, ..Recorder::default() };
        ScrollToButton::new(surface, &ButtonIcon::scroll_to_top(), ButtonTheme::default(), 15)
            .unwrap()
    }

    fn last_look(b: &ScrollToButton<Recorder>) -> &(PressLook, Duration) {
        b.surface().looks.last().unwrap()
    }

    #[test]
    fn construction_clears_scrollbar_and_paints_released() {
        let b = build(16);
        let s = b.surface();
        assert_eq!(s.moves, vec![(31, Duration::ZERO)]);

        let layers = s.mounted.as_ref().unwrap();
        assert_eq!(layers.fill_target, "svg-rect");
        assert_eq!((layers.z_index, layers.z_index_shadow), (100, 101));

        assert_eq!(s.looks.len(), 1);
        assert_eq!(last_look(&b), &(b.theme().look(false), Duration::ZERO));
        assert!(!b.is_pressed());
    }

    #[test]
    fn construction_fails_on_bad_icon() {
        let icon = ButtonIcon::new("svg-rect", "<svg>");
        let err = ScrollToButton::new(Recorder::default(), &icon, ButtonTheme::default(), 0)
            .unwrap_err();
        assert!(matches!(err, ScrollError::IconMarkup(_)));
    }

    #[test]
    fn construction_fails_on_unreadable_inset() {
        let surface = Recorder { bad_right: true, ..Recorder::default() };
        let res = ScrollToButton::new(surface, &ButtonIcon::scroll_to_top(), ButtonTheme::default(), 15);
        assert!(matches!(res, Err(ScrollError::InvalidValue { .. })));
    }

    #[test]
    fn press_then_release_eases_back() {
        let mut b = build(16);
        let eased = b.theme().transition_duration;

        b.handle(PointerEvent::MouseDown);
        assert!(b.is_pressed());
        assert_eq!(last_look(&b), &(b.theme().look(true), Duration::ZERO));

        b.handle(PointerEvent::MouseUp);
        assert!(!b.is_pressed());
        assert_eq!(last_look(&b), &(b.theme().look(false), eased));
    }

    #[test]
    fn press_then_leave_eases_back() {
        let mut b = build(16);
        b.handle(PointerEvent::TouchStart);
        b.handle(PointerEvent::MouseLeave);
        assert!(!b.is_pressed());
        assert_eq!(last_look(&b), &(b.theme().look(false), b.theme().transition_duration));
    }

    #[test]
    fn repeated_press_is_ignored() {
        let mut b = build(16);
        b.handle(PointerEvent::TouchStart);
        b.handle(PointerEvent::MouseDown);
        // construction + one press
        assert_eq!(b.surface().looks.len(), 2);
    }

    #[test]
    fn touch_move_releases_only_outside_bounds() {
        let mut b = build(16);
        b.handle(PointerEvent::TouchStart);

        b.handle(PointerEvent::TouchMove(Point::new(120.0, 150.0)));
        assert!(b.is_pressed());
        b.handle(PointerEvent::TouchMove(Point::new(158.0, 186.0)));
        assert!(b.is_pressed());

        b.handle(PointerEvent::TouchMove(Point::new(158.5, 150.0)));
        assert!(!b.is_pressed());
        assert_eq!(last_look(&b).0, b.theme().look(false));
    }

    #[test]
    fn click_leaves_press_state_alone() {
        let mut b = build(16);
        b.handle(PointerEvent::MouseDown);
        b.handle(PointerEvent::Click);
        assert!(b.is_pressed());
    }

    #[test]
    fn translations_accumulate() {
        let mut b = build(16);
        b.translate_x(40).unwrap();
        b.translate_x_with(-10, Duration::from_millis(50)).unwrap();
        assert_eq!(b.surface().right, 31 - (40 - 10));
        assert_eq!(
            b.surface().moves[1..],
            [(-9, b.theme().transition_duration), (1, Duration::from_millis(50))]
        );
    }

    #[test]
    fn overflowing_translation_is_rejected_in_place() {
        let mut b = build(16);
        b.translate_x_with(2_000_000_000, Duration::ZERO).unwrap();
        assert_eq!(b.surface().right, 31 - 2_000_000_000);

        let err = b.translate_x_with(2_000_000_000, Duration::ZERO).unwrap_err();
        assert!(matches!(err, ScrollError::InvalidValue { ref property, .. } if property == "right"));
        assert_eq!(b.surface().right, 31 - 2_000_000_000);
        assert_eq!(b.surface().moves.len(), 2);

        let mut fresh = build(16);
        assert!(fresh.translate_x(i32::MIN).is_err());
        assert_eq!(fresh.surface().right, 31);
    }

    #[test]
    fn show_and_hide_use_theme_timings() {
        let mut b = build(16);
        b.show();
        b.hide();
        assert_eq!(b.surface().fades, vec!["show 300ms", "hide 300ms 300ms"]);
    }

    #[test]
    fn apply_theme_repaints_current_state_instantly() {
        let mut b = build(16);
        b.handle(PointerEvent::MouseDown);

        let mut theme = ButtonTheme::default();
        theme.accent_color = scroll_theme::Color::from_rgba8(0, 128, 255, 0.5);
        b.apply_theme(theme);

        let (look, duration) = last_look(&b);
        assert_eq!(look.fill, "rgba(0, 128, 255, 0.5)");
        assert_eq!(*duration, Duration::ZERO);
        assert!(b.is_pressed());
    }
}
