#![forbid(unsafe_code)]

//! WCAG 2.x relative luminance and contrast utilities.

use crate::rgb::Rgb;

/// Minimum contrast for normal text at level AA.
pub const WCAG_AA_NORMAL_TEXT: f64 = 4.5;
/// Minimum contrast for large text at level AA.
pub const WCAG_AA_LARGE_TEXT: f64 = 3.0;
/// Minimum contrast for normal text at level AAA.
pub const WCAG_AAA_NORMAL_TEXT: f64 = 7.0;
/// Minimum contrast for large text at level AAA.
pub const WCAG_AAA_LARGE_TEXT: f64 = 4.5;

/// Decode one sRGB channel in `[0, 1]` to linear light.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `[0, 1]`.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = srgb_to_linear(f64::from(color.r) / 255.0);
    let g = srgb_to_linear(f64::from(color.g) / 255.0);
    let b = srgb_to_linear(f64::from(color.b) / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio in `[1, 21]`. Argument order does not matter.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let lum_a = relative_luminance(a);
    let lum_b = relative_luminance(b);
    let lighter = lum_a.max(lum_b);
    let darker = lum_a.min(lum_b);
    (lighter + 0.05) / (darker + 0.05)
}

/// Black or white, whichever reads better on `background`. Ties go to black.
#[must_use]
pub fn readable_text_color(background: Rgb) -> Rgb {
    let with_dark = contrast_ratio(background, Rgb::BLACK);
    let with_light = contrast_ratio(background, Rgb::WHITE);
    if with_dark >= with_light {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

/// The candidate with the highest contrast against `background`.
///
/// Earlier candidates win ties. Returns `None` for an empty slice.
#[must_use]
pub fn best_text_color(background: Rgb, candidates: &[Rgb]) -> Option<Rgb> {
    let (&first, rest) = candidates.split_first()?;
    let mut best = first;
    let mut best_ratio = contrast_ratio(best, background);
    for &candidate in rest {
        let ratio = contrast_ratio(candidate, background);
        if ratio > best_ratio {
            best = candidate;
            best_ratio = ratio;
        }
    }
    Some(best)
}

#[must_use]
pub fn meets_wcag_aa(fg: Rgb, bg: Rgb) -> bool {
    contrast_ratio(fg, bg) >= WCAG_AA_NORMAL_TEXT
}

#[must_use]
pub fn meets_wcag_aa_large_text(fg: Rgb, bg: Rgb) -> bool {
    contrast_ratio(fg, bg) >= WCAG_AA_LARGE_TEXT
}

#[must_use]
pub fn meets_wcag_aaa(fg: Rgb, bg: Rgb) -> bool {
    contrast_ratio(fg, bg) >= WCAG_AAA_NORMAL_TEXT
}
