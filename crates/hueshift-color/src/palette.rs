#![forbid(unsafe_code)]

//! Three-color palettes derived from a single random hue.
//!
//! A [`Palette`] shares one saturation and one value across its three slots;
//! only the hue differs:
//!
//! ```text
//! primary    h
//! secondary  h + 1/12 turn   (analogous neighbour)
//! accent     h + 1/3 turn    (triadic partner)
//! ```
//!
//! The offsets and the sampling ranges live in [`PaletteConfig`].
//!
//! # Example
//!
//! ```
//! use hueshift_color::{Palette, Rgb};
//!
//! let palette = Palette::from_hsv(0.0, 0.5, 0.7);
//! assert_eq!(palette.primary, Rgb::new(178, 89, 89));
//! ```

use rand::Rng;

use crate::hsv::{hsv_to_rgb, wrap_hue};
use crate::rgb::Rgb;

/// An inclusive-exclusive sampling range `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitRange {
    pub min: f64,
    pub max: f64,
}

impl UnitRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Map a uniform sample in `[0, 1)` into this range.
    #[inline]
    #[must_use]
    pub fn lerp(self, t: f64) -> f64 {
        self.min + t * (self.max - self.min)
    }

    #[must_use]
    pub fn contains(self, x: f64) -> bool {
        (self.min..=self.max).contains(&x)
    }
}

/// Sampling ranges and hue offsets for palette generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaletteConfig {
    /// Shared saturation range.
    pub saturation: UnitRange,
    /// Shared value range. The upper bound may exceed `1.0` for over-bright
    /// palettes; channels saturate at 255.
    pub value: UnitRange,
    /// Hue offset of the secondary slot, in turns.
    pub secondary_offset: f64,
    /// Hue offset of the accent slot, in turns.
    pub accent_offset: f64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            saturation: UnitRange::new(0.5, 1.0),
            value: UnitRange::new(0.7, 1.15),
            secondary_offset: 1.0 / 12.0,
            accent_offset: 1.0 / 3.0,
        }
    }
}

impl PaletteConfig {
    /// Check that every parameter is usable.
    ///
    /// Returns a list of problems; empty means valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let ranges = [("saturation", self.saturation), ("value", self.value)];
        for (name, range) in ranges {
            if !(range.min.is_finite() && range.max.is_finite()) {
                errors.push(format!("palette.{name} bounds must be finite"));
                continue;
            }
            if range.min < 0.0 {
                errors.push(format!("palette.{name}.min must be >= 0, got {}", range.min));
            }
            if range.min > range.max {
                errors.push(format!(
                    "palette.{name}.min ({}) must not exceed max ({})",
                    range.min, range.max
                ));
            }
        }
        if self.saturation.max > 1.0 {
            errors.push(format!(
                "palette.saturation.max must be <= 1, got {}",
                self.saturation.max
            ));
        }

        for (name, offset) in [
            ("secondary_offset", self.secondary_offset),
            ("accent_offset", self.accent_offset),
        ] {
            if !offset.is_finite() {
                errors.push(format!("palette.{name} must be finite, got {offset}"));
            }
        }

        errors
    }
}

/// Primary, secondary and accent colors sharing saturation and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
}

impl Palette {
    /// Build a palette from explicit HSV coordinates using default offsets.
    #[must_use]
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        Self::from_hsv_with(&PaletteConfig::default(), h, s, v)
    }

    /// Build a palette from explicit HSV coordinates and configured offsets.
    #[must_use]
    pub fn from_hsv_with(config: &PaletteConfig, h: f64, s: f64, v: f64) -> Self {
        let h = wrap_hue(h);
        Self {
            primary: hsv_to_rgb(h, s, v),
            secondary: hsv_to_rgb(wrap_hue(h + config.secondary_offset), s, v),
            accent: hsv_to_rgb(wrap_hue(h + config.accent_offset), s, v),
        }
    }

    /// Draw a random palette: one uniform hue, one shared saturation and
    /// value from the configured ranges.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, config: &PaletteConfig) -> Self {
        let h: f64 = rng.random();
        let s = config.saturation.lerp(rng.random());
        let v = config.value.lerp(rng.random());
        tracing::trace!(h, s, v, "palette.generate");
        Self::from_hsv_with(config, h, s, v)
    }

    /// Draw a random palette from the thread-local RNG with default ranges.
    #[cfg(feature = "thread-rng")]
    #[must_use]
    pub fn random() -> Self {
        Self::generate(&mut rand::rng(), &PaletteConfig::default())
    }

    /// Slots in `[primary, secondary, accent]` order.
    #[must_use]
    pub const fn colors(&self) -> [Rgb; 3] {
        [self.primary, self.secondary, self.accent]
    }
}
