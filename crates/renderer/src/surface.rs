use crate::document::{Document, NodeId, SharedDocument};
use scroll_core::{ButtonSurface, Layers, PressLook, Rect, Result};
use scroll_metrics::{format_px, property_as_integer};
use scroll_theme::format_time;
use std::cell::{Ref, RefMut};
use std::time::Duration;
use tracing::warn;

/// [`ButtonSurface`] backed by one host element of a shared [`Document`].
#[derive(Debug, Clone)]
pub struct ElementSurface {
    doc:     SharedDocument,
    host_id: String,
    host:    NodeId,
    icon:    Option<NodeId>,
    shadow:  Option<NodeId>,
    fill:    Option<NodeId>,
}

impl ElementSurface {
    /// Bind to the host with `host_id`; fails when no such host exists.
    pub fn locate(doc: &SharedDocument, host_id: &str) -> Result<Self> {
        let host = doc.borrow().locate(host_id)?;
        Ok(Self {
            doc: doc.clone(),
            host_id: host_id.to_string(),
            host,
            icon: None,
            shadow: None,
            fill: None,
        })
    }

    pub fn host(&self) -> NodeId {
        self.host
    }

    pub fn icon(&self) -> Option<NodeId> {
        self.icon
    }

    pub fn shadow(&self) -> Option<NodeId> {
        self.shadow
    }

    /// The tintable shape inside the icon.
    pub fn fill_target(&self) -> Option<NodeId> {
        self.fill
    }

    pub fn document(&self) -> Ref<'_, Document> {
        self.doc.borrow()
    }

    fn document_mut(&self) -> RefMut<'_, Document> {
        self.doc.borrow_mut()
    }
}

/// Style shared by the icon and shadow layers: fill the host exactly.
fn cover_host(doc: &mut Document, node: NodeId, radius: &str, z_index: i32) {
    for (property, value) in [
        ("position", "absolute"),
        ("left", "0"),
        ("top", "0"),
        ("height", "100%"),
        ("width", "100%"),
        ("border", "none"),
        ("border-radius", radius),
    ] {
        doc.set_style(node, property, value);
    }
    doc.set_style(node, "z-index", &z_index.to_string());
}

impl ButtonSurface for ElementSurface {
    fn host_id(&self) -> &str {
        &self.host_id
    }

    fn mount(&mut self, layers: &Layers) -> Result<()> {
        let mut doc = self.doc.borrow_mut();
        let host = self.host;

        doc.set_style(host, "cursor", "pointer");
        doc.set_style(host, "z-index", &layers.z_index.to_string());

        let icon = doc.append_child(host, "svg", Some(&layers.icon_markup));
        cover_host(&mut doc, icon, &layers.border_radius, layers.z_index);
        let fill = doc.append_scoped(icon, "path", &layers.fill_target);

        let shadow = doc.append_child(host, "div", None);
        cover_host(&mut doc, shadow, &layers.border_radius, layers.z_index_shadow);

        self.icon = Some(icon);
        self.fill = Some(fill);
        self.shadow = Some(shadow);
        Ok(())
    }

    fn show(&mut self, fade: Duration) {
        let mut doc = self.document_mut();
        doc.set_style(
            self.host,
            "transition",
            &format!("opacity {}, visibility 0s", format_time(fade)),
        );
        doc.set_style(self.host, "opacity", "1.0");
        doc.set_style(self.host, "visibility", "visible");
    }

    fn hide(&mut self, fade: Duration, delay: Duration) {
        let mut doc = self.document_mut();
        doc.set_style(
            self.host,
            "transition",
            &format!("opacity {}, visibility 0s {}", format_time(fade), format_time(delay)),
        );
        doc.set_style(self.host, "opacity", "0.0");
        doc.set_style(self.host, "visibility", "hidden");
    }

    fn right_inset(&self) -> Result<i32> {
        property_as_integer(&*self.document(), &self.host_id, "right")
    }

    fn translate(&mut self, right: i32, duration: Duration) {
        let mut doc = self.document_mut();
        doc.set_style(self.host, "transition", &format!("right {}", format_time(duration)));
        doc.set_style(self.host, "right", &format_px(right));
    }

    fn set_pressed(&mut self, look: &PressLook, duration: Duration) {
        let (Some(shadow), Some(fill)) = (self.shadow, self.fill) else {
            warn!("'{}' repainted before mount; ignoring", self.host_id);
            return;
        };

        let mut doc = self.document_mut();
        let t = format_time(duration);
        doc.set_style(shadow, "transition", &format!("box-shadow {t}"));
        doc.set_style(shadow, "box-shadow", &look.box_shadow);
        doc.set_style(fill, "transition", &format!("fill {t}"));
        doc.set_style(fill, "fill", &look.fill);
    }

    fn icon_bounds(&self) -> Rect {
        // The icon covers the host exactly.
        self.document().layout_box(self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scroll_config::HostLayout;
    use scroll_core::{Point, PointerEvent, ScrollError};
    use scroll_metrics::PlatformMetrics;
    use scroll_theme::ButtonTheme;
    use scroll_widgets::{ButtonIcon, ScrollToButton};

    const HOST: &str = "scroll-to-top-button";

    fn page() -> SharedDocument {
        let mut doc = Document::new(240, 320, 15);
        doc.add_host(HOST, HostLayout { right: 16, bottom: 173, width: 58, height: 86 });
        doc.shared()
    }

    fn top_button(doc: &SharedDocument) -> ScrollToButton<ElementSurface> {
        let surface = ElementSurface::locate(doc, HOST).unwrap();
        let scrollbar = doc.borrow().scrollbar_width();
        ScrollToButton::new(surface, &ButtonIcon::scroll_to_top(), ButtonTheme::default(), scrollbar)
            .unwrap()
    }

    fn host_style(doc: &SharedDocument, property: &str) -> String {
        let d = doc.borrow();
        let host = d.locate(HOST).unwrap();
        d.computed(host, property).unwrap()
    }

    #[test]
    fn missing_host_fails_fast() {
        let doc = page();
        let err = ElementSurface::locate(&doc, "scroll-to-nowhere").unwrap_err();
        assert!(matches!(err, ScrollError::HostNotFound(id) if id == "scroll-to-nowhere"));
    }

    #[test]
    fn mount_builds_icon_then_shadow() {
        let doc = page();
        let button = top_button(&doc);
        let s = button.surface();

        let d = doc.borrow();
        let host = s.host();
        assert_eq!(d.children(host), &[s.icon().unwrap(), s.shadow().unwrap()]);
        assert_eq!(d.tag(s.icon().unwrap()), "svg");
        assert_eq!(d.tag(s.shadow().unwrap()), "div");
        assert!(d.markup(s.icon().unwrap()).unwrap().contains("svg-rect"));
        assert_eq!(d.find_in(host, "svg-rect"), s.fill_target());
        assert_eq!(d.computed(host, "cursor").as_deref(), Some("pointer"));
        assert_eq!(d.computed(host, "z-index").as_deref(), Some("100"));
        assert_eq!(d.computed(s.shadow().unwrap(), "z-index").as_deref(), Some("101"));
        assert_eq!(d.computed(s.icon().unwrap(), "border-radius").as_deref(), Some("8px"));
    }

    #[test]
    fn construction_then_instant_translate() {
        let doc = page();
        let mut button = top_button(&doc);
        assert_eq!(host_style(&doc, "right"), "31px");

        button.translate_x_with(100, Duration::ZERO).unwrap();
        assert_eq!(host_style(&doc, "right"), "-69px");
    }

    #[test]
    fn back_to_back_translations_add_up() {
        let doc = page();
        let mut button = top_button(&doc);

        // Second call lands while the first is still animating.
        button.translate_x(40).unwrap();
        button.translate_x(25).unwrap();
        assert_eq!(button.surface().right_inset().unwrap(), 31 - (40 + 25));

        doc.borrow_mut().advance(Duration::from_secs(1));
        assert_eq!(host_style(&doc, "right"), "-34px");
    }

    #[test]
    fn hide_defers_visibility_flip() {
        let doc = page();
        let mut button = top_button(&doc);

        button.show();
        button.hide();
        assert_eq!(host_style(&doc, "visibility"), "visible");
        // Opacity target is already 0; only visibility waits.
        let host = button.surface().host();
        assert_eq!(doc.borrow().specified(host, "opacity").as_deref(), Some("0.0"));

        doc.borrow_mut().advance(Duration::from_millis(300));
        assert_eq!(host_style(&doc, "visibility"), "hidden");
        assert_eq!(host_style(&doc, "opacity"), "0.0");
    }

    #[test]
    fn press_release_toggles_shadow_and_fill() {
        let doc = page();
        let mut button = top_button(&doc);
        let theme = button.theme().clone();
        let (shadow, fill) = {
            let s = button.surface();
            (s.shadow().unwrap(), s.fill_target().unwrap())
        };
        let style = |node: NodeId, property: &str| doc.borrow().computed(node, property).unwrap();

        assert_eq!(style(shadow, "box-shadow"), theme.box_shadow);
        assert_eq!(style(fill, "fill"), theme.main_color.to_string());

        button.handle(PointerEvent::MouseDown);
        assert_eq!(style(shadow, "box-shadow"), format!("{} inset", theme.box_shadow));
        assert_eq!(style(fill, "fill"), theme.accent_color.to_string());

        button.handle(PointerEvent::MouseUp);
        doc.borrow_mut().advance(theme.transition_duration);
        assert_eq!(style(shadow, "box-shadow"), theme.box_shadow);
        assert_eq!(style(fill, "fill"), theme.main_color.to_string());
    }

    #[test]
    fn touch_move_checks_live_icon_box() {
        let doc = page();
        let mut button = top_button(&doc);
        let bounds = button.surface().icon_bounds();
        // client 225 - right 31 - width 58
        assert_eq!(bounds.left, 136.0);

        button.handle(PointerEvent::TouchStart);
        button.handle(PointerEvent::TouchMove(Point::new(bounds.left + 1.0, bounds.top + 1.0)));
        assert!(button.is_pressed());
        button.handle(PointerEvent::TouchMove(Point::new(bounds.left - 1.0, bounds.top + 1.0)));
        assert!(!button.is_pressed());
    }
}
