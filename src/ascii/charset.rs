//! Character ramp used for brightness-to-glyph mapping.

/// Density ramp, ordered from darkest/densest (`@`) to lightest/sparsest (`x`).
///
/// Dark pixels get heavy glyphs and bright pixels get light ones, which reads
/// well on a dark terminal once each glyph is tinted with its pixel color.
#[rustfmt::skip]
pub const CHAR_RAMP: &[char] = &[
    '@', '&', '&', '%', '#', '$', 'O', 'E', 'H', 'M', 'B', 'D', 'R', '8', 'G',
    'A', 'S', '0', 'o', 'V', 'v', 'C', '(', ')', 's', '~', '-', '+', '=', '/',
    '|', 'l', 'i', '.', ',', ':', ';', '\'', ' ', 'q', 'z', 'j', 'k', 'x',
];

/// Map a brightness in `0.0..=255.0` to an index into a ramp of `levels` glyphs.
///
/// `idx = floor(brightness / 255 * (levels - 1))`, clamped to the last glyph.
/// Returns 0 for an empty ramp.
#[inline]
pub fn glyph_index(brightness: f64, levels: usize) -> usize {
    if levels == 0 {
        return 0;
    }

    let last = levels - 1;
    let idx = ((brightness / 255.0) * last as f64) as usize;
    idx.min(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(CHAR_RAMP.first(), Some(&'@'));
        assert_eq!(CHAR_RAMP.last(), Some(&'x'));
        assert_eq!(CHAR_RAMP.len(), 44);
    }

    #[test]
    fn test_glyph_index_extremes() {
        assert_eq!(glyph_index(0.0, CHAR_RAMP.len()), 0);
        assert_eq!(glyph_index(255.0, CHAR_RAMP.len()), CHAR_RAMP.len() - 1);
    }

    #[test]
    fn test_glyph_index_truncates() {
        // 128 / 255 * 43 = 21.58
        assert_eq!(glyph_index(128.0, 44), 21);
        // 1 / 255 * 43 = 0.17
        assert_eq!(glyph_index(1.0, 44), 0);
    }

    #[test]
    fn test_glyph_index_clamps_out_of_range() {
        assert_eq!(glyph_index(1000.0, 10), 9);
    }

    #[test]
    fn test_glyph_index_empty_ramp() {
        assert_eq!(glyph_index(200.0, 0), 0);
    }

    #[test]
    fn test_glyph_index_monotonic() {
        let mut prev = 0;
        for b in 0..=255 {
            let idx = glyph_index(b as f64, CHAR_RAMP.len());
            assert!(idx >= prev, "index went backwards at brightness {}", b);
            prev = idx;
        }
    }
}
