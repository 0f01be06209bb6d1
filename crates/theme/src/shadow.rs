use crate::colors::Color;

/// A single CSS `box-shadow` layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur:     f32,
    pub spread:   f32,
    pub color:    Color,
    pub inset:    bool,
}

impl BoxShadow {
    /// Parse `[inset] <x> <y> [blur [spread]] [color] [inset]`.
    ///
    /// Lengths accept `px`, `rem`/`em` (16px) or a bare `0`.  A missing
    /// colour defaults to opaque black.
    pub fn parse(s: &str) -> Option<Self> {
        let mut lengths = Vec::with_capacity(4);
        let mut color = None;
        let mut inset = false;

        for token in tokens(s) {
            if token == "inset" {
                inset = true;
            } else if let Some(len) = parse_length(token) {
                lengths.push(len);
            } else {
                color = Some(Color::parse(token)?);
            }
        }

        let (offset_x, offset_y, blur, spread) = match lengths.as_slice() {
            [x, y] => (*x, *y, 0.0, 0.0),
            [x, y, b] => (*x, *y, *b, 0.0),
            [x, y, b, s] => (*x, *y, *b, *s),
            _ => return None,
        };

        Some(Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color: color.unwrap_or(Color::BLACK),
            inset,
        })
    }
}

/// Split on whitespace outside parentheses, so `rgba(0, 0, 0, 0.4)` stays whole.
fn tokens(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut start = None;

    for (i, ch) in s.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                if let Some(st) = start.take() {
                    out.push(&s[st..i]);
                }
                continue;
            }
            _ => {}
        }
        if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(st) = start {
        out.push(&s[st..]);
    }
    out
}

/// CSS length in px.
pub fn parse_length(token: &str) -> Option<f32> {
    const REM_PX: f32 = 16.0;

    if token == "0" {
        return Some(0.0);
    }
    if let Some(n) = token.strip_suffix("px") {
        return n.parse().ok();
    }
    if let Some(n) = token.strip_suffix("rem").or_else(|| token.strip_suffix("em")) {
        return n.parse::<f32>().ok().map(|v| v * REM_PX);
    }
    None
}
