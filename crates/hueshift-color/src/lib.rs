#![forbid(unsafe_code)]

//! Color engine for hueshift.
//!
//! # Role in hueshift
//! `hueshift-color` is the pure part of the system: it turns a random hue
//! into a three-slot [`Palette`] and decides which text color stays legible
//! on any background. `hueshift-page` feeds these results into the document;
//! nothing here touches a document.
//!
//! # This crate provides
//! - [`Rgb`] with hex and CSS codecs.
//! - [`hsv_to_rgb`] for the six-sector HSV conversion.
//! - WCAG [`relative_luminance`], [`contrast_ratio`] and
//!   [`readable_text_color`].
//! - [`Palette`] generation driven by [`PaletteConfig`].

/// WCAG luminance and contrast.
pub mod contrast;
/// HSV conversion.
pub mod hsv;
/// Palette generation.
pub mod palette;
/// RGB color type and codecs.
pub mod rgb;

pub use contrast::{
    WCAG_AA_LARGE_TEXT, WCAG_AA_NORMAL_TEXT, WCAG_AAA_LARGE_TEXT, WCAG_AAA_NORMAL_TEXT,
    best_text_color, contrast_ratio, meets_wcag_aa, meets_wcag_aa_large_text, meets_wcag_aaa,
    readable_text_color, relative_luminance,
};
pub use hsv::{hsv_to_rgb, wrap_hue};
pub use palette::{Palette, PaletteConfig, UnitRange};
pub use rgb::{Rgb, is_transparent};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_text_on_generated_slots_meets_large_text_contrast() {
        // Black or white against any color always reaches at least ~4.58:1.
        for h in 0..24 {
            let palette = Palette::from_hsv(f64::from(h) / 24.0, 0.75, 0.9);
            for bg in palette.colors() {
                let text = readable_text_color(bg);
                assert!(
                    meets_wcag_aa_large_text(text, bg),
                    "text {text} on {bg} below 3:1"
                );
            }
        }
    }

    #[test]
    fn hex_of_generated_palette_parses_back() {
        let palette = Palette::from_hsv(0.42, 0.6, 0.8);
        for color in palette.colors() {
            assert_eq!(Rgb::from_hex(&color.to_hex()), Some(color));
            assert_eq!(Rgb::from_css(&color.to_hex()), Some(color));
        }
    }
}
