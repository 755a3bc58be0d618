#![forbid(unsafe_code)]

//! 8-bit RGB colors and their textual encodings.
//!
//! [`Rgb`] is the only color representation the engine computes with. Alpha
//! never participates in luminance or contrast math; it only shows up as a
//! hex suffix when a translucent background is written out
//! ([`Rgb::to_hex_with_alpha`]).
//!
//! Two parsers are provided:
//! - [`Rgb::from_hex`] for `#RGB`, `#RRGGBB` and `#RRGGBBAA` (alpha ignored).
//! - [`Rgb::from_css`] for the strings a browser hands back from computed
//!   style queries (`rgb(...)`, `rgba(...)`, hex, and a couple of keywords).

use core::fmt;

/// An opaque sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, in `[r, g, b]` order.
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Uppercase `#RRGGBBAA` with the given alpha byte appended.
    #[must_use]
    pub fn to_hex_with_alpha(self, alpha: u8) -> String {
        format!("#{:02X}{:02X}{:02X}{alpha:02X}", self.r, self.g, self.b)
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    ///
    /// Alpha digits are accepted and dropped.
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            3 => {
                let mut out = [0u8; 3];
                for (slot, ch) in out.iter_mut().zip(digits.chars()) {
                    let nibble = ch.to_digit(16)? as u8;
                    *slot = nibble * 17;
                }
                Some(Self::from(out))
            }
            6 | 8 => {
                let byte = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
                Some(Self::new(byte(0)?, byte(2)?, byte(4)?))
            }
            _ => None,
        }
    }

    /// Parse a CSS color as reported by computed style queries.
    ///
    /// Returns `None` for `transparent`, for unknown keywords, and for
    /// anything malformed. The alpha component of `rgba(...)` is ignored.
    #[must_use]
    pub fn from_css(s: &str) -> Option<Self> {
        let value = s.trim().to_ascii_lowercase();
        match value.as_str() {
            "white" => return Some(Self::WHITE),
            "black" => return Some(Self::BLACK),
            "transparent" | "" => return None,
            _ => {}
        }
        if value.starts_with('#') {
            return Self::from_hex(&value);
        }

        let args = value
            .strip_prefix("rgba(")
            .or_else(|| value.strip_prefix("rgb("))?
            .strip_suffix(')')?;
        let mut parts = args
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        let mut channels = [0u8; 3];
        for slot in &mut channels {
            *slot = parse_css_channel(parts.next()?)?;
        }
        Some(Self::from(channels))
    }
}

fn parse_css_channel(token: &str) -> Option<u8> {
    let value = match token.strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().ok()? * 2.55,
        None => token.parse::<f64>().ok()?,
    };
    if !value.is_finite() {
        return None;
    }
    Some(value.round().clamp(0.0, 255.0) as u8)
}

/// Whether a computed background string means "no background".
///
/// Only the two literal spellings browsers emit are recognized:
/// `transparent` and `rgba(0, 0, 0, 0)` (whitespace-insensitive).
#[must_use]
pub fn is_transparent(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    compact == "transparent" || compact == "rgba(0,0,0,0)"
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.channels()
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}
