//! Grid size calculation for aspect-ratio-correct ASCII rendering.

/// Number of character columns every rendering uses.
pub const TARGET_COLS: u32 = 60;

/// Terminal character aspect compensation.
/// Glyphs are roughly twice as tall as they are wide, so the row count is
/// divided by this factor to keep the artwork's proportions on screen.
pub const WIDTH_RATIO: f64 = 2.2;

/// Calculate how many character rows an image of `img_width` x `img_height`
/// pixels needs when rendered `cols` characters wide.
///
/// The result is `floor((height / width) * cols / WIDTH_RATIO)`, clamped to at
/// least one row. A zero width (or zero columns) also yields a single row.
///
/// # Example
/// ```ignore
/// // Square album art at 60 columns
/// assert_eq!(target_rows(600, 600, 60), 27);
/// ```
pub fn target_rows(img_width: u32, img_height: u32, cols: u32) -> u32 {
    if img_width == 0 || cols == 0 {
        return 1;
    }

    let rows = (img_height as f64 / img_width as f64) * cols as f64 / WIDTH_RATIO;
    (rows.floor() as u32).max(1)
}
