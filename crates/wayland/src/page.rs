use scroll_config::ScrollConfig;
use scroll_core::{ButtonId, ButtonSurface, Point, PointerEvent, Result, ScrollError};
use scroll_metrics::PlatformMetrics;
use scroll_renderer::{ElementSurface, SharedDocument};
use scroll_theme::ButtonTheme;
use scroll_widgets::{ButtonIcon, ScrollToButton};
use std::time::Duration;
use tracing::{debug, info};

/// The two page buttons and the clicks that move them together.
///
/// Clicking the top button snaps both buttons `offset` px toward the right
/// edge with no animation; clicking the bottom one slides both back by the
/// same amount over the theme duration.  The two are deliberately not
/// mirror images of each other.
#[derive(Debug)]
pub struct Page<S> {
    top:    ScrollToButton<S>,
    bottom: ScrollToButton<S>,
    offset: i32,
    ready:  bool,
}

impl Page<ElementSurface> {
    /// Build both buttons on the hosts named in `config`.
    pub fn build(doc: &SharedDocument, config: &ScrollConfig, theme: ButtonTheme) -> Result<Self> {
        let scrollbar = doc.borrow().scrollbar_width();

        let top = ScrollToButton::new(
            ElementSurface::locate(doc, &config.buttons.top)?,
            &ButtonIcon::scroll_to_top(),
            theme.clone(),
            scrollbar,
        )?;
        let bottom = ScrollToButton::new(
            ElementSurface::locate(doc, &config.buttons.bottom)?,
            &ButtonIcon::scroll_to_bottom(),
            theme,
            scrollbar,
        )?;

        Ok(Self::new(top, bottom, config.wiring.offset))
    }
}

impl<S: ButtonSurface> Page<S> {
    pub fn new(top: ScrollToButton<S>, bottom: ScrollToButton<S>, offset: i32) -> Self {
        Self {
            top,
            bottom,
            offset,
            ready: false,
        }
    }

    /// Arm the click bindings.  Clicks before this are ignored.
    pub fn on_ready(&mut self) {
        self.ready = true;
        info!("Scroll buttons ready (offset {}px)", self.offset);
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn button(&self, id: ButtonId) -> &ScrollToButton<S> {
        match id {
            ButtonId::Top => &self.top,
            ButtonId::Bottom => &self.bottom,
        }
    }

    fn button_mut(&mut self, id: ButtonId) -> &mut ScrollToButton<S> {
        match id {
            ButtonId::Top => &mut self.top,
            ButtonId::Bottom => &mut self.bottom,
        }
    }

    /// Route pointer input to one button.
    ///
    /// A release over a pressed button counts as a click, as does an
    /// explicit [`PointerEvent::Click`].  Leaving the button releases it, so
    /// press, leave, re-enter, release is not a click here even though a
    /// browser `click` would fire for it.
    pub fn handle(&mut self, id: ButtonId, event: PointerEvent) -> Result<()> {
        let button = self.button_mut(id);
        let was_pressed = button.is_pressed();
        button.handle(event);

        match event {
            PointerEvent::Click => self.activate(id),
            PointerEvent::MouseUp if was_pressed => self.activate(id),
            _ => Ok(()),
        }
    }

    /// Route a touch point to every pressed button; each releases itself
    /// when the point has left its icon.
    pub fn touch_moved(&mut self, at: Point) {
        for button in [&mut self.top, &mut self.bottom] {
            if button.is_pressed() {
                button.handle(PointerEvent::TouchMove(at));
            }
        }
    }

    /// Run the click binding of `id`.
    pub fn activate(&mut self, id: ButtonId) -> Result<()> {
        if !self.ready {
            debug!("{id:?} clicked before page ready; ignoring");
            return Ok(());
        }

        match id {
            ButtonId::Top => {
                self.top.translate_x_with(self.offset, Duration::ZERO)?;
                self.bottom.translate_x_with(self.offset, Duration::ZERO)?;
            }
            ButtonId::Bottom => {
                let back = self.offset.checked_neg().ok_or_else(|| ScrollError::InvalidValue {
                    property: "offset".into(),
                    value:    self.offset.to_string(),
                })?;
                self.top.translate_x(back)?;
                self.bottom.translate_x(back)?;
            }
        }
        debug!("{id:?} activated");
        Ok(())
    }

    /// Recolor both buttons.
    pub fn set_theme(&mut self, theme: ButtonTheme) {
        self.top.apply_theme(theme.clone());
        self.bottom.apply_theme(theme);
    }

    /// Fade both buttons in.
    pub fn show(&mut self) {
        self.top.show();
        self.bottom.show();
    }
}
