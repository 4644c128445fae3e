//! Pixel to (glyph, color) mapping.

use image::Rgb;

use super::charset::{glyph_index, CHAR_RAMP};
use super::grayscale::brightness;
use super::palette::{boost, nearest_code, PaletteEntry, ANSI_PALETTE};

/// One rendered character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub code: u8,
}

/// Maps sampled pixels to glyphs and ANSI color codes.
///
/// Holds read-only references to the ramp and palette tables. Mapping is pure
/// and position independent.
#[derive(Debug, Clone, Copy)]
pub struct Quantizer {
    ramp: &'static [char],
    palette: &'static [PaletteEntry],
}

impl Default for Quantizer {
    fn default() -> Self {
        Self {
            ramp: CHAR_RAMP,
            palette: &ANSI_PALETTE,
        }
    }
}

impl Quantizer {
    pub fn ramp(&self) -> &'static [char] {
        self.ramp
    }

    pub fn palette(&self) -> &'static [PaletteEntry] {
        self.palette
    }

    /// Glyph for a pixel, chosen by mean brightness.
    pub fn glyph(&self, px: Rgb<u8>) -> char {
        let idx = glyph_index(brightness(px), self.ramp.len());
        self.ramp.get(idx).copied().unwrap_or(' ')
    }

    /// Color code for a pixel, matched after boosting.
    pub fn color_code(&self, px: Rgb<u8>) -> u8 {
        nearest_code(self.palette, boost(px))
    }

    pub fn quantize(&self, px: Rgb<u8>) -> Cell {
        Cell {
            glyph: self.glyph(px),
            code: self.color_code(px),
        }
    }
}
