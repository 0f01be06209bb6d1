//! Wayland layer-shell surface for `scroll-to`.
//!
//! Owns the Iced application loop: it keeps the retained style document,
//! drives the page wiring from pointer input, and redraws the two buttons
//! from the document's resolved styles.  Background work:
//! - animation clock (only while a transition is running)
//! - config file watcher (live recolor on change)

pub mod page;

pub use page::Page;

use futures::channel::mpsc::Sender;
use iced::{
    event, touch,
    widget::{column, container, mouse_area, svg, Stack},
    window, Border, Element, Length, Padding, Shadow, Subscription, Task, Vector,
};
use iced_layershell::{
    build_pattern::application,
    reexport::{Anchor, Layer},
    settings::{LayerShellSettings, Settings},
    to_layer_message,
};
use scroll_config::{default_path, load as load_config, ConfigWatcher, ScrollConfig};
use scroll_core::{event::Message as AppMessage, ButtonId, Point, PointerEvent};
use scroll_renderer::{Document, ElementSurface, SharedDocument};
use scroll_theme::{shadow::parse_length, BoxShadow, ButtonTheme, Color};
use std::cell::Cell;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Animation frame interval while a transition is running.
const FRAME_MS: u64 = 16;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Start the overlay.  Returns once the surface is closed.
///
/// Configuration and page construction are checked before any surface is
/// created, so a bad host id or icon fails here with a readable error.
pub fn run() -> anyhow::Result<()> {
    let config = load_config(default_path())?;
    let (width, height) = (config.page.width, config.page.height);

    // Built once, up front; the boot closure hands this instance over.
    let built = Cell::new(Some(ScrollApp::build(config.clone())?));

    application(
        move || ScrollApp::boot(built.take(), &config),
        ScrollApp::namespace,
        ScrollApp::update,
        ScrollApp::view,
    )
    .subscription(ScrollApp::subscription)
    .style(ScrollApp::style)
    .settings(Settings {
        layer_settings: LayerShellSettings {
            size: Some((width, height)),
            exclusive_zone: 0,
            anchor: Anchor::Bottom | Anchor::Right,
            layer: Layer::Overlay,
            ..Default::default()
        },
        ..Default::default()
    })
    .run()?;

    Ok(())
}

// ── Message ───────────────────────────────────────────────────────────────────

/// Top-level application messages.
///
/// `#[to_layer_message]` injects layer-shell control variants; they are
/// handled by the backend and never reach `update()`.
#[to_layer_message]
#[derive(Debug, Clone)]
pub enum Message {
    /// Propagate a core page message.
    App(AppMessage),
}

// ── State ─────────────────────────────────────────────────────────────────────

struct ScrollApp {
    doc:    SharedDocument,
    page:   Option<Page<ElementSurface>>,
    config: ScrollConfig,
}

impl ScrollApp {
    /// Build the document, publish the theme to its root scope, and mount
    /// both buttons with the theme read back from there.
    fn build(config: ScrollConfig) -> scroll_core::Result<Self> {
        let doc = Document::from_config(&config.page, &config.buttons).shared();

        let base = ButtonTheme::from_config(&config.theme);
        base.publish(&mut *doc.borrow_mut());
        let theme = ButtonTheme::from_root(&*doc.borrow(), &base);

        let page = Page::build(&doc, &config, theme)?;
        Ok(Self { doc, page: Some(page), config })
    }

    /// Take over the instance built in [`run`].  Should boot ever run again,
    /// rebuild from config, and fall back to the built-in defaults when that
    /// fails too.
    fn boot(built: Option<Self>, config: &ScrollConfig) -> (Self, Task<Message>) {
        let app = built
            .map(Ok)
            .unwrap_or_else(|| Self::build(config.clone()))
            .or_else(|e| {
                error!("Cannot build scroll buttons: {e}; using defaults");
                Self::build(ScrollConfig::default())
            });

        match app {
            Ok(app) => (app, Task::done(Message::App(AppMessage::PageReady))),
            Err(e) => {
                error!("Cannot build default scroll buttons: {e}");
                (Self::inert(config.clone()), Task::none())
            }
        }
    }

    /// A surface with no buttons on it.
    fn inert(config: ScrollConfig) -> Self {
        let doc = Document::new(config.page.width, config.page.height, config.page.scrollbar_width)
            .shared();
        Self { doc, page: None, config }
    }

    fn namespace() -> String {
        String::from("scroll-to")
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::App(msg) => self.handle_app(msg),
            // Layer-shell injected variants handled by the backend.
            _ => {}
        }
        Task::none()
    }

    fn handle_app(&mut self, msg: AppMessage) {
        // Keep the document clock current before anything reads or declares.
        self.doc.borrow_mut().set_now(Instant::now());

        let Some(page) = self.page.as_mut() else {
            return;
        };

        match msg {
            AppMessage::Pointer(id, event) => {
                if let Err(e) = page.handle(id, event) {
                    warn!("{id:?} {event:?} failed: {e}");
                }
            }
            AppMessage::TouchMoved(at) => page.touch_moved(at),
            AppMessage::PageReady => {
                page.on_ready();
                page.show();
            }
            AppMessage::ConfigReloaded => self.recolor(),
            AppMessage::Tick => {}
        }
    }

    /// Re-read the `[theme]` section and repaint both buttons.
    fn recolor(&mut self) {
        let Some(page) = self.page.as_mut() else {
            return;
        };
        let cfg = match load_config(default_path()) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Config reload failed: {e}");
                return;
            }
        };

        let base = ButtonTheme::from_config(&cfg.theme);
        base.publish(&mut *self.doc.borrow_mut());
        let theme = ButtonTheme::from_root(&*self.doc.borrow(), &base);
        page.set_theme(theme);

        if cfg.buttons.top != self.config.buttons.top
            || cfg.buttons.bottom != self.config.buttons.bottom
            || cfg.page.width != self.config.page.width
        {
            warn!("Only [theme] changes apply live; restart for layout changes");
        }
        self.config.theme = cfg.theme;
        info!("Theme reloaded");
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let doc = self.doc.borrow();
        let (_, height) = doc.inner_size();

        let scrollbar = container(column![])
            .width(Length::Fixed(self.config.page.scrollbar_width as f32))
            .height(Length::Fixed(height as f32))
            .style(|_| container::Style {
                background: Some(Color::WHITE.with_alpha(0.15).to_iced().into()),
                ..container::Style::default()
            });

        let mut layers: Vec<Element<'_, Message>> = vec![container(scrollbar)
            .align_right(Length::Fill)
            .height(Length::Fill)
            .into()];

        for id in [ButtonId::Top, ButtonId::Bottom] {
            if let Some(button) = self.button_view(&doc, id) {
                layers.push(button);
            }
        }

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// One button, positioned at its document box.  `None` once hidden or
    /// pushed entirely past the window edge.
    fn button_view(&self, doc: &Document, id: ButtonId) -> Option<Element<'static, Message>> {
        let button = self.page.as_ref()?.button(id);
        let surface = button.surface();
        let host = surface.host();

        if doc.computed(host, "visibility").as_deref() == Some("hidden") {
            return None;
        }
        let bounds = doc.layout_box(host);
        let (inner_width, _) = doc.inner_size();
        if bounds.left >= inner_width as f32 || bounds.right() <= 0.0 {
            return None;
        }

        let opacity = doc.computed_number(host, "opacity").unwrap_or(1.0);
        let fill = surface
            .fill_target()
            .and_then(|n| doc.computed(n, "fill"))
            .unwrap_or_else(|| button.theme().main_color.to_string());
        let markup = match button.icon().tinted(&fill) {
            Ok(m) => m,
            Err(e) => {
                warn!("Cannot tint icon for {id:?}: {e}");
                button.icon().markup().to_string()
            }
        };
        let shadow = surface
            .shadow()
            .and_then(|n| doc.computed(n, "box-shadow"))
            .as_deref()
            .and_then(BoxShadow::parse);
        let radius = surface
            .icon()
            .and_then(|n| doc.computed(n, "border-radius"))
            .as_deref()
            .and_then(parse_length)
            .unwrap_or(0.0);

        let icon = svg(svg::Handle::from_memory(markup.into_bytes()))
            .width(Length::Fill)
            .height(Length::Fill)
            .opacity(opacity);

        let framed = container(icon)
            .width(Length::Fixed(bounds.width))
            .height(Length::Fixed(bounds.height))
            .style(move |_| frame_style(shadow, radius));

        // Finger presses arrive here as mouse presses; finger moves come
        // from `touch_event`.
        let area = mouse_area(framed)
            .on_press(Message::App(AppMessage::Pointer(id, PointerEvent::MouseDown)))
            .on_release(Message::App(AppMessage::Pointer(id, PointerEvent::MouseUp)))
            .on_exit(Message::App(AppMessage::Pointer(id, PointerEvent::MouseLeave)));

        Some(
            container(area)
                .padding(Padding {
                    top: bounds.top.max(0.0),
                    right: 0.0,
                    bottom: 0.0,
                    left: bounds.left.max(0.0),
                })
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        )
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        let mut subs = vec![
            Subscription::run(config_stream),
            iced::event::listen_with(touch_event),
        ];

        if self.doc.borrow().is_animating() {
            subs.push(
                iced::time::every(Duration::from_millis(FRAME_MS))
                    .map(|_| Message::App(AppMessage::Tick)),
            );
        }
        Subscription::batch(subs)
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: iced::Color::TRANSPARENT,
            text_color: iced::Color::WHITE,
        }
    }
}

/// Container style for a button frame.  Iced has no inset shadows, so a
/// pressed button draws its shadow colour as an inner border instead.
fn frame_style(shadow: Option<BoxShadow>, radius: f32) -> container::Style {
    let mut style = container::Style {
        border: Border {
            radius: radius.into(),
            ..Border::default()
        },
        ..container::Style::default()
    };

    match shadow {
        Some(s) if s.inset => {
            style.border.color = s.color.to_iced();
            style.border.width = (s.blur / 4.0).max(1.0);
        }
        Some(s) => {
            style.shadow = Shadow {
                color: s.color.to_iced(),
                offset: Vector::new(s.offset_x, s.offset_y),
                blur_radius: s.blur,
            };
        }
        None => {}
    }
    style
}

// ── Subscription streams ──────────────────────────────────────────────────────

/// Finger movement anywhere on the surface.  Mouse movement is not routed:
/// leaving a button already releases it.
fn touch_event(event: iced::Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        iced::Event::Touch(touch::Event::FingerMoved { position, .. }) => Some(Message::App(
            AppMessage::TouchMoved(Point::new(position.x, position.y)),
        )),
        _ => None,
    }
}

/// Watches the config file for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (_watcher, mut rx) = ConfigWatcher::spawn(default_path());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::App(AppMessage::ConfigReloaded));
        }

        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}
