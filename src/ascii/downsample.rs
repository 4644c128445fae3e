//! Nearest-neighbor downsampling from a decoded image to a character grid.

use image::{GenericImageView, Pixel, Rgb, RgbImage};

/// Downsample an image to a `cols` x `rows` grid of RGB samples.
///
/// Each target cell takes exactly one source pixel, no averaging:
///
/// ```text
/// src_x = x * src_width  / cols
/// src_y = y * src_height / rows
/// ```
///
/// Coordinates are relative to the view's origin. A source with no pixels
/// produces a black grid.
///
/// # Returns
/// An `RgbImage` with exactly `cols` x `rows` pixels.
pub fn resample_nearest<I>(src: &I, cols: u32, rows: u32) -> RgbImage
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    let (src_w, src_h) = src.dimensions();
    let mut grid = RgbImage::new(cols, rows);

    if src_w == 0 || src_h == 0 {
        return grid;
    }

    for (x, y, cell) in grid.enumerate_pixels_mut() {
        let src_x = (x as u64 * src_w as u64 / cols as u64) as u32;
        let src_y = (y as u64 * src_h as u64 / rows as u64) as u32;
        *cell = sample(src, src_x, src_y);
    }

    grid
}

#[inline]
fn sample<I>(src: &I, x: u32, y: u32) -> Rgb<u8>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    src.get_pixel(x, y).to_rgb()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_output_dimensions() {
        let src = RgbImage::new(640, 480);
        let grid = resample_nearest(&src, 60, 20);
        assert_eq!(grid.dimensions(), (60, 20));
    }

    #[test]
    fn test_upsampling_repeats_pixels() {
        // 2x1 image: red | blue, stretched to 4x2
        let mut src = RgbImage::new(2, 1);
        src.put_pixel(0, 0, Rgb([255, 0, 0]));
        src.put_pixel(1, 0, Rgb([0, 0, 255]));

        let grid = resample_nearest(&src, 4, 2);
        for y in 0..2 {
            assert_eq!(grid.get_pixel(0, y).0, [255, 0, 0]);
            assert_eq!(grid.get_pixel(1, y).0, [255, 0, 0]);
            assert_eq!(grid.get_pixel(2, y).0, [0, 0, 255]);
            assert_eq!(grid.get_pixel(3, y).0, [0, 0, 255]);
        }
    }

    #[test]
    fn test_downsampling_picks_top_left_of_cell() {
        // 4x4 image where each pixel encodes its coordinates
        let src = RgbImage::from_fn(4, 4, |x, y| Rgb([x as u8 * 10, y as u8 * 10, 0]));
        let grid = resample_nearest(&src, 2, 2);

        assert_eq!(grid.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(grid.get_pixel(1, 0).0, [20, 0, 0]);
        assert_eq!(grid.get_pixel(0, 1).0, [0, 20, 0]);
        assert_eq!(grid.get_pixel(1, 1).0, [20, 20, 0]);
    }

    #[test]
    fn test_rgba_source_ignores_alpha() {
        let src = RgbaImage::from_pixel(3, 3, image::Rgba([1, 2, 3, 0]));
        let grid = resample_nearest(&src, 2, 2);
        assert!(grid.pixels().all(|p| p.0 == [1, 2, 3]));
    }

    #[test]
    fn test_empty_source_gives_black_grid() {
        let src = RgbImage::new(0, 0);
        let grid = resample_nearest(&src, 3, 1);
        assert_eq!(grid.dimensions(), (3, 1));
        assert!(grid.pixels().all(|p| p.0 == [0, 0, 0]));
    }
}
