//! Brightness of a sampled pixel.

use image::Rgb;

/// Plain arithmetic mean of the three channels, in `0.0..=255.0`.
///
/// This is intentionally not luma-weighted: a saturated blue and a saturated
/// red of the same channel value pick the same glyph, and their color code
/// carries the hue.
#[inline]
pub fn brightness(px: Rgb<u8>) -> f64 {
    let [r, g, b] = px.0;
    (r as f64 + g as f64 + b as f64) / 3.0
}
