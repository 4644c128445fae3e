//! The 16-color ANSI foreground palette and nearest-color matching.

use image::Rgb;

/// One palette entry: a reference color and its SGR foreground code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub rgb: [u8; 3],
    pub code: u8,
    pub name: &'static str,
}

const fn entry(r: u8, g: u8, b: u8, code: u8, name: &'static str) -> PaletteEntry {
    PaletteEntry {
        rgb: [r, g, b],
        code,
        name,
    }
}

/// Standard (30-37) and bright (90-97) foreground colors with VGA-style
/// reference values. Order matters for ties: the first minimum wins.
pub const ANSI_PALETTE: [PaletteEntry; 16] = [
    entry(0, 0, 0, 30, "black"),
    entry(170, 0, 0, 31, "red"),
    entry(0, 170, 0, 32, "green"),
    entry(170, 85, 0, 33, "yellow"),
    entry(0, 0, 170, 34, "blue"),
    entry(170, 0, 170, 35, "magenta"),
    entry(0, 170, 170, 36, "cyan"),
    entry(170, 170, 170, 37, "white"),
    entry(85, 85, 85, 90, "bright black"),
    entry(255, 85, 85, 91, "bright red"),
    entry(85, 255, 85, 92, "bright green"),
    entry(255, 255, 85, 93, "bright yellow"),
    entry(85, 85, 255, 94, "bright blue"),
    entry(255, 85, 255, 95, "bright magenta"),
    entry(85, 255, 255, 96, "bright cyan"),
    entry(255, 255, 255, 97, "bright white"),
];

/// Code returned when the palette has no entries.
pub const FALLBACK_CODE: u8 = 37;

/// Channel multiplier applied before matching, for visibility on dark terminals.
pub const COLOR_BOOST: f64 = 1.1;

/// Brighten each channel by [`COLOR_BOOST`], saturating at 255.
#[inline]
pub fn boost(px: Rgb<u8>) -> Rgb<u8> {
    Rgb(px.0.map(|c| (c as f64 * COLOR_BOOST).min(255.0) as u8))
}

#[inline]
fn distance_sq(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x as i32 - y as i32;
            (d * d) as u32
        })
        .sum()
}

/// Find the code of the palette entry closest to `px` in RGB space.
///
/// Linear scan with strict `<`, so on equal distances the entry that comes
/// first in `palette` wins. An empty palette yields [`FALLBACK_CODE`].
pub fn nearest_code(palette: &[PaletteEntry], px: Rgb<u8>) -> u8 {
    let mut best = FALLBACK_CODE;
    let mut best_dist = u32::MAX;

    for entry in palette {
        let dist = distance_sq(px.0, entry.rgb);
        if dist < best_dist {
            best_dist = dist;
            best = entry.code;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_standard_and_bright_codes() {
        let codes: Vec<u8> = ANSI_PALETTE.iter().map(|e| e.code).collect();
        assert_eq!(&codes[..8], &[30, 31, 32, 33, 34, 35, 36, 37]);
        assert_eq!(&codes[8..], &[90, 91, 92, 93, 94, 95, 96, 97]);
    }

    #[test]
    fn test_exact_matches() {
        for entry in &ANSI_PALETTE {
            assert_eq!(nearest_code(&ANSI_PALETTE, Rgb(entry.rgb)), entry.code);
        }
    }

    #[test]
    fn test_near_colors() {
        assert_eq!(nearest_code(&ANSI_PALETTE, Rgb([10, 5, 0])), 30);
        assert_eq!(nearest_code(&ANSI_PALETTE, Rgb([240, 250, 245])), 97);
        assert_eq!(nearest_code(&ANSI_PALETTE, Rgb([200, 40, 30])), 31);
        assert_eq!(nearest_code(&ANSI_PALETTE, Rgb([60, 60, 230])), 94);
    }

    #[test]
    fn test_tie_goes_to_first_entry() {
        let palette = [
            entry(0, 0, 0, 1, "a"),
            entry(20, 0, 0, 2, "b"),
        ];
        assert_eq!(nearest_code(&palette, Rgb([10, 0, 0])), 1);

        let reversed = [palette[1], palette[0]];
        assert_eq!(nearest_code(&reversed, Rgb([10, 0, 0])), 2);
    }

    #[test]
    fn test_empty_palette_falls_back_to_white() {
        assert_eq!(nearest_code(&[], Rgb([1, 2, 3])), FALLBACK_CODE);
    }

    #[test]
    fn test_boost_saturates() {
        assert_eq!(boost(Rgb([0, 100, 250])).0, [0, 110, 255]);
        assert_eq!(boost(Rgb([255, 255, 255])).0, [255, 255, 255]);
    }

    #[test]
    fn test_boost_truncates() {
        // 15 * 1.1 = 16.5
        assert_eq!(boost(Rgb([15, 15, 15])).0, [16, 16, 16]);
    }
}
