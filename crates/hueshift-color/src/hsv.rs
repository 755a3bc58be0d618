#![forbid(unsafe_code)]

//! HSV to RGB conversion.

use crate::rgb::Rgb;

/// Wrap a hue expressed in turns into `[0, 1)`.
#[inline]
#[must_use]
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(1.0);
    // rem_euclid can return exactly 1.0 for tiny negative inputs.
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Convert hue/saturation/value to an 8-bit color.
///
/// `h` is a fraction of a full turn; the sector is `floor(h * 6) mod 6`, so
/// hues outside `[0, 1)` wrap. `s` and `v` are nominally in `[0, 1]`. A value
/// above `1.0` is allowed and produces over-bright channels, which saturate
/// at 255 instead of spilling into neighbouring channels.
///
/// NaN inputs are a precondition violation.
#[must_use]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    debug_assert!(
        !(h.is_nan() || s.is_nan() || v.is_nan()),
        "hsv_to_rgb called with NaN: h={h} s={s} v={v}"
    );

    let scaled = h * 6.0;
    let sector = scaled.floor();
    let f = scaled - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(quantize(r), quantize(g), quantize(b))
}

#[inline]
fn quantize(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}
