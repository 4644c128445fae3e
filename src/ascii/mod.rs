//! Artwork to colorized ASCII conversion.
//!
//! The pipeline has four stages:
//!
//! 1. **Loading** - classify the URI, fetch bytes from disk or HTTP, decode
//! 2. **Resampling** - nearest-neighbor downsample to a 60-column grid whose
//!    height compensates for tall terminal glyphs
//! 3. **Quantization** - mean brightness picks a glyph from [`CHAR_RAMP`],
//!    boosted RGB picks the nearest of the 16 ANSI colors
//! 4. **Rendering** - wrap every glyph in its color escape and pad each row
//!
//! [`convert`] runs all four with default settings. The ramp, palette and
//! grid width are fixed.

mod charset;
mod dimensions;
mod downsample;
mod error;
mod grayscale;
mod loader;
mod mapping;
mod palette;
mod render;

pub use charset::{glyph_index, CHAR_RAMP};
pub use dimensions::{target_rows, TARGET_COLS, WIDTH_RATIO};
pub use downsample::resample_nearest;
pub use error::ArtError;
pub use grayscale::brightness;
pub use loader::{
    decode_image, ArtSource, Fetch, FileFetcher, HttpFetcher, Loader, DEFAULT_HTTP_TIMEOUT,
};
pub use mapping::{Cell, Quantizer};
pub use palette::{boost, nearest_code, PaletteEntry, ANSI_PALETTE, COLOR_BOOST, FALLBACK_CODE};
pub use render::{render_lines, ANSI_RESET, LEFT_PAD, RIGHT_PAD};

use std::time::Duration;

use image::RgbImage;

/// Converts artwork URIs into rendered terminal lines.
///
/// Holds no per-call state: converting the same local file twice gives
/// byte-identical output.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    loader: Loader,
    quantizer: Quantizer,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom timeout for HTTP artwork downloads.
    pub fn with_http_timeout(timeout: Duration) -> Self {
        Self {
            loader: Loader::new(HttpFetcher::new(timeout)),
            quantizer: Quantizer::default(),
        }
    }

    /// Load `uri` and render it.
    ///
    /// # Returns
    /// One line per grid row followed by a single empty line.
    ///
    /// # Errors
    /// Any [`ArtError`]; blank input fails before touching disk or network.
    pub fn convert(&self, uri: &str) -> Result<Vec<String>, ArtError> {
        let img = self.loader.load(uri)?;
        Ok(self.render_image(&img))
    }

    /// Render an already decoded image.
    pub fn render_image(&self, img: &RgbImage) -> Vec<String> {
        let (width, height) = img.dimensions();
        let rows = target_rows(width, height, TARGET_COLS);
        let grid = resample_nearest(img, TARGET_COLS, rows);
        render_lines(&grid, &self.quantizer)
    }
}

/// Convert the artwork at `uri` into colorized ASCII lines.
///
/// Accepts bare paths, `file://` URIs and `http(s)://` URLs.
pub fn convert(uri: &str) -> Result<Vec<String>, ArtError> {
    Converter::new().convert(uri)
}
