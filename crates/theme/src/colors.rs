use std::fmt;

/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK:       Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE:       Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const TRANSPARENT: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    /// Build from 8-bit channels and a `[0, 1]` alpha.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Parse a CSS colour: `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)` or
    /// `rgba(r, g, b, a)`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }

        let (args, want_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
            (rest.strip_suffix(')')?, true)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (rest.strip_suffix(')')?, false)
        } else {
            return None;
        };

        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let channel = |p: &str| -> Option<u8> { p.parse::<u8>().ok() };
        match (parts.as_slice(), want_alpha) {
            ([r, g, b], false) => Some(Self::from_rgba8(channel(r)?, channel(g)?, channel(b)?, 1.0)),
            ([r, g, b, a], true) => {
                let a: f32 = a.parse().ok()?;
                Some(Self::from_rgba8(channel(r)?, channel(g)?, channel(b)?, a))
            }
            _ => None,
        }
    }

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        match hex.len() {
            6 => Some(Self::from_rgba8(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?, 1.0)),
            8 => Some(Self::from_rgba8(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
                byte(&hex[6..8])? as f32 / 255.0,
            )),
            _ => None,
        }
    }

    /// Convert to an [`iced::Color`] for use in Iced widgets.
    #[inline]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }
}

/// Formats as `rgba(r, g, b, a)`, which [`Color::parse`] reads back.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(f, "rgba({}, {}, {}, {})", c(self.r), c(self.g), c(self.b), self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgba() {
        let c = Color::parse("rgba(255, 255, 255, 0.6)").unwrap();
        assert_eq!(c, Color::WHITE.with_alpha(0.6));
    }

    #[test]
    fn parses_rgb_and_hex() {
        assert_eq!(Color::parse("rgb(0,0,0)"), Some(Color::BLACK));
        assert_eq!(Color::parse("#ffffff"), Some(Color::WHITE));
        assert_eq!(Color::parse("#00000000"), Some(Color::TRANSPARENT));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Color::parse("red"), None);
        assert_eq!(Color::parse("rgba(1, 2, 3)"), None);
        assert_eq!(Color::parse("rgb(300, 0, 0)"), None);
        assert_eq!(Color::parse("#12345"), None);
    }

    #[test]
    fn display_is_css() {
        assert_eq!(Color::from_rgba8(255, 140, 0, 0.6).to_string(), "rgba(255, 140, 0, 0.6)");
    }
}
