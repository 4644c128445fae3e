//! Assembly of colorized terminal lines from a sample grid.

use std::fmt::Write;

use image::RgbImage;

use super::mapping::Quantizer;

/// Padding written before the first glyph of every row.
pub const LEFT_PAD: &str = "  ";

/// Padding written after the last glyph of every row.
pub const RIGHT_PAD: &str = " ";

/// SGR reset sequence closing every glyph.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Render a sample grid as printable lines.
///
/// Every row becomes `LEFT_PAD`, then `ESC[<code>m<glyph>ESC[0m` per column,
/// then `RIGHT_PAD`. Rows keep the grid's top-to-bottom order and one empty
/// spacer line is appended at the end.
pub fn render_lines(grid: &RgbImage, quantizer: &Quantizer) -> Vec<String> {
    let (cols, rows) = grid.dimensions();
    let mut lines = Vec::with_capacity(rows as usize + 1);

    for y in 0..rows {
        // "\x1b[NNm" + glyph + reset, per column
        let mut line = String::with_capacity(LEFT_PAD.len() + cols as usize * 12 + RIGHT_PAD.len());
        line.push_str(LEFT_PAD);
        for x in 0..cols {
            let cell = quantizer.quantize(*grid.get_pixel(x, y));
            let _ = write!(line, "\x1b[{}m{}{}", cell.code, cell.glyph, ANSI_RESET);
        }
        line.push_str(RIGHT_PAD);
        lines.push(line);
    }

    lines.push(String::new());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_single_black_cell() {
        let grid = RgbImage::from_pixel(1, 1, Rgb([0, 0, 0]));
        let lines = render_lines(&grid, &Quantizer::default());
        assert_eq!(lines, vec!["  \x1b[30m@\x1b[0m ".to_string(), String::new()]);
    }

    #[test]
    fn test_row_order_matches_grid() {
        let mut grid = RgbImage::new(2, 2);
        grid.put_pixel(0, 0, Rgb([255, 255, 255]));
        grid.put_pixel(1, 0, Rgb([255, 255, 255]));

        let lines = render_lines(&grid, &Quantizer::default());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "  \x1b[97mx\x1b[0m\x1b[97mx\x1b[0m ");
        assert_eq!(lines[1], "  \x1b[30m@\x1b[0m\x1b[30m@\x1b[0m ");
        assert!(lines[2].is_empty());
    }

    #[test]
    fn test_every_glyph_is_reset() {
        let grid = RgbImage::from_fn(5, 3, |x, y| Rgb([x as u8 * 50, y as u8 * 80, 100]));
        let lines = render_lines(&grid, &Quantizer::default());
        for line in &lines[..3] {
            assert_eq!(line.matches(ANSI_RESET).count(), 5);
            assert!(line.starts_with(LEFT_PAD));
            assert!(line.ends_with(RIGHT_PAD));
        }
    }
}
