use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use scroll_core::{Result, ScrollError};

/// Id of the tintable shape in the built-in icons.
pub const FILL_TARGET_ID: &str = "svg-rect";

// Both icons share a 72×108 box: bar inset 16 from the edge, 10 from the
// sides past its rounded caps, 4 thick with radius 2, 52 long.  The first
// path is the box with the glyph cut out; that is what gets tinted.  The
// other two redraw the glyph as a fixed translucent white highlight.

const TOP_MARKUP: &str = r#"<svg viewBox="0 0 72 108" xmlns="http://www.w3.org/2000/svg">
    <path id="svg-rect" d="M 0 0 L 0 108 L 72 108 L 72 0 Z
        M 62 16 A 2 2 0 1 1 62 20 L 10 20 A 2 2 0 1 1 10 16 Z
        M 63.7321 70.0333 A 2 2 0 1 1 60.2680 72.0333 L 38.0 33.4640
        L 38.0 90.0 A 2 2 0 1 1 34.0 90.0 L 34.0 33.4640
        L 11.7320 72.0333 A 2 2 0 1 1 8.2679 70.0333 L 34.2679 25.0
        A 2 2 0 0 1 37.7321 25.0 Z" stroke-width="0" />
    <path d="M 62 16 A 2 2 0 1 1 62 20 L 10 20 A 2 2 0 1 1 10 16 Z"
        stroke-width="0" fill="rgba(255, 255, 255, 0.6)" />
    <path d="M 63.7321 70.0333 A 2 2 0 1 1 60.2680 72.0333 L 38.0 33.4640
        L 38.0 90.0 A 2 2 0 1 1 34.0 90.0 L 34.0 33.4640
        L 11.7320 72.0333 A 2 2 0 1 1 8.2679 70.0333 L 34.2679 25.0
        A 2 2 0 0 1 37.7321 25.0 Z" stroke-width="0" fill="rgba(255, 255, 255, 0.6)" />
</svg>"#;

const BOTTOM_MARKUP: &str = r#"<svg viewBox="0 0 72 108" xmlns="http://www.w3.org/2000/svg">
    <path id="svg-rect" d="M 0 0 L 0 108 L 72 108 L 72 0 Z
        M 62 88 A 2 2 0 1 1 62 92 L 10 92 A 2 2 0 1 1 10 88 Z
        M 8.2679 37.9667 A 2 2 0 1 1 11.732 35.9667 L 34.0 74.536
        L 34.0 18.0 A 2 2 0 1 1 38.0 18.0 L 38.0 74.536
        L 60.2680 35.9667 A 2 2 0 1 1 63.7321 37.9667 L 37.7321 83.0
        A 2 2 0 0 1 34.2674 83.0 Z" stroke-width="0" />
    <path d="M 62 88 A 2 2 0 1 1 62 92 L 10 92 A 2 2 0 1 1 10 88 Z"
        stroke-width="0" fill="rgba(255, 255, 255, 0.6)" />
    <path d="M 8.2679 37.9667 A 2 2 0 1 1 11.732 35.9667 L 34.0 74.536
        L 34.0 18.0 A 2 2 0 1 1 38.0 18.0 L 38.0 74.536
        L 60.2680 35.9667 A 2 2 0 1 1 63.7321 37.9667 L 37.7321 83.0
        A 2 2 0 0 1 34.2674 83.0 Z" stroke-width="0" fill="rgba(255, 255, 255, 0.6)" />
</svg>"#;

/// Icon configuration handed to [`crate::ScrollToButton::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonIcon {
    /// Id of the shape inside `markup` that receives the press-state fill.
    pub shape_id: String,
    /// SVG source.
    pub markup: String,
}

impl ButtonIcon {
    pub fn new(shape_id: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            shape_id: shape_id.into(),
            markup: markup.into(),
        }
    }

    /// Upward arrow over a horizontal bar.
    pub fn scroll_to_top() -> Self {
        Self::new(FILL_TARGET_ID, TOP_MARKUP)
    }

    /// Downward arrow under a horizontal bar.
    pub fn scroll_to_bottom() -> Self {
        Self::new(FILL_TARGET_ID, BOTTOM_MARKUP)
    }
}

/// The `viewBox` of an icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x:      f32,
    pub y:      f32,
    pub width:  f32,
    pub height: f32,
}

/// Validated icon markup with a known fill target.
#[derive(Debug, Clone)]
pub struct IconDocument {
    markup:   String,
    shape_id: String,
    view_box: Option<ViewBox>,
}

impl IconDocument {
    /// Check that `markup` is well-formed with an `<svg>` root and contains an
    /// element whose `id` is `shape_id`.
    pub fn parse(markup: &str, shape_id: &str) -> Result<Self> {
        let mut reader = Reader::from_str(markup);
        reader.config_mut().trim_text(true);

        let mut depth = 0usize;
        let mut seen_root = false;
        let mut view_box = None;
        let mut found = false;

        loop {
            let (start, empty) = match reader.read_event().map_err(markup_error)? {
                Event::Eof => break,
                Event::Start(e) => (e, false),
                Event::Empty(e) => (e, true),
                Event::End(_) => {
                    depth = depth.saturating_sub(1);
                    continue;
                }
                _ => continue,
            };

            if depth == 0 {
                if seen_root {
                    return Err(ScrollError::IconMarkup("more than one root element".into()));
                }
                seen_root = true;
                if start.local_name().as_ref() != b"svg" {
                    return Err(ScrollError::IconMarkup(format!(
                        "root element is <{}>, expected <svg>",
                        String::from_utf8_lossy(start.name().as_ref())
                    )));
                }
                view_box = attribute(&start, b"viewBox")?.as_deref().and_then(parse_view_box);
            }

            if attribute(&start, b"id")?.as_deref() == Some(shape_id) {
                found = true;
            }
            if !empty {
                depth += 1;
            }
        }

        if !seen_root {
            return Err(ScrollError::IconMarkup("no root element".into()));
        }
        if depth != 0 {
            return Err(ScrollError::IconMarkup("unclosed element".into()));
        }
        if !found {
            return Err(ScrollError::ShapeNotFound {
                shape_id: shape_id.to_string(),
            });
        }

        Ok(Self {
            markup: markup.to_string(),
            shape_id: shape_id.to_string(),
            view_box,
        })
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn shape_id(&self) -> &str {
        &self.shape_id
    }

    pub fn view_box(&self) -> Option<ViewBox> {
        self.view_box
    }

    /// Re-serialize the icon with the fill target's `fill` set to `fill`.
    ///
    /// Every other element is written back untouched, so the decorative
    /// highlights keep their own fill.
    pub fn tinted(&self, fill: &str) -> Result<String> {
        let mut reader = Reader::from_str(&self.markup);
        let mut writer = Writer::new(Vec::new());

        loop {
            let event = match reader.read_event().map_err(markup_error)? {
                Event::Eof => break,
                Event::Start(e) if self.is_target(&e)? => Event::Start(with_fill(&e, fill)?),
                Event::Empty(e) if self.is_target(&e)? => Event::Empty(with_fill(&e, fill)?),
                other => other,
            };
            writer
                .write_event(event)
                .map_err(|e| ScrollError::IconMarkup(e.to_string()))?;
        }

        String::from_utf8(writer.into_inner()).map_err(|e| ScrollError::IconMarkup(e.to_string()))
    }

    fn is_target(&self, start: &BytesStart<'_>) -> Result<bool> {
        Ok(attribute(start, b"id")?.as_deref() == Some(self.shape_id.as_str()))
    }
}

fn with_fill(start: &BytesStart<'_>, fill: &str) -> Result<BytesStart<'static>> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut out = BytesStart::new(name);
    for attr in start.attributes() {
        let attr = attr.map_err(|e| ScrollError::IconMarkup(e.to_string()))?;
        if attr.key.as_ref() != b"fill" {
            out.push_attribute(attr);
        }
    }
    out.push_attribute(("fill", fill));
    Ok(out)
}

fn attribute(start: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in start.attributes() {
        let attr = attr.map_err(|e| ScrollError::IconMarkup(e.to_string()))?;
        if attr.key.as_ref() == key {
            return Ok(Some(String::from_utf8_lossy(&attr.value).into_owned()));
        }
    }
    Ok(None)
}

fn parse_view_box(raw: &str) -> Option<ViewBox> {
    let nums: Vec<f32> = raw
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<std::result::Result<_, _>>()
        .ok()?;
    match nums.as_slice() {
        [x, y, width, height] => Some(ViewBox { x: *x, y: *y, width: *width, height: *height }),
        _ => None,
    }
}

fn markup_error(e: quick_xml::Error) -> ScrollError {
    ScrollError::IconMarkup(e.to_string())
}
