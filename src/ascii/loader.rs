//! Artwork loading: URI classification, byte fetching and image decoding.
//!
//! Media players report artwork as a bare path, a `file://` URI or an
//! `http(s)://` URL. [`ArtSource::parse`] decides which one it is, a [`Fetch`]
//! implementation turns the location into bytes, and [`decode_image`] sniffs
//! the format and produces an RGB raster.

use std::path::PathBuf;
use std::time::Duration;

use image::RgbImage;
use url::Url;

use super::error::ArtError;

/// Default timeout for artwork downloads.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the artwork bytes live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtSource {
    /// A filesystem path.
    Local(String),
    /// An `http` or `https` URL.
    Remote(String),
}

impl ArtSource {
    /// Classify an artwork URI.
    ///
    /// Blank input is rejected before anything else. Strings without a scheme
    /// are treated as literal paths, `file://` URIs contribute their decoded
    /// path, and any unknown scheme falls back to the literal string as a path.
    pub fn parse(uri: &str) -> Result<Self, ArtError> {
        if uri.trim().is_empty() {
            return Err(ArtError::EmptyInput);
        }

        match Url::parse(uri) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(ArtSource::Remote(uri.to_string())),
                "file" => {
                    let path = url
                        .to_file_path()
                        .map(|p| p.to_string_lossy().into_owned())
                        .unwrap_or_else(|_| url.path().to_string());
                    Ok(ArtSource::Local(path))
                }
                _ => Ok(ArtSource::Local(uri.to_string())),
            },
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(ArtSource::Local(uri.to_string())),
            Err(source) => Err(ArtError::UriParse {
                uri: uri.to_string(),
                source,
            }),
        }
    }

    /// The path or URL string handed to the fetcher.
    pub fn location(&self) -> &str {
        match self {
            ArtSource::Local(path) => path,
            ArtSource::Remote(url) => url,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ArtSource::Remote(_))
    }
}

/// Something that can turn a location into raw bytes.
pub trait Fetch {
    fn fetch(&self, location: &str) -> Result<Vec<u8>, ArtError>;
}

/// Reads artwork from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

impl Fetch for FileFetcher {
    fn fetch(&self, location: &str) -> Result<Vec<u8>, ArtError> {
        std::fs::read(location).map_err(|source| ArtError::Filesystem {
            path: PathBuf::from(location),
            source,
        })
    }
}

/// Downloads artwork with a blocking HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    timeout: Duration,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_HTTP_TIMEOUT)
    }
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, location: &str) -> Result<Vec<u8>, ArtError> {
        let network = |source: reqwest::Error| ArtError::Network {
            uri: location.to_string(),
            source,
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("playfetch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(network)?;

        // The response (and its connection) is dropped on every return path.
        let response = client
            .get(location)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(network)?;
        let body = response.bytes().map_err(network)?;

        Ok(body.to_vec())
    }
}

/// Decode image bytes of any supported format into an RGB raster.
///
/// Alpha is discarded.
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage, ArtError> {
    Ok(image::load_from_memory(bytes)?.to_rgb8())
}

/// Dispatches a classified [`ArtSource`] to the matching fetcher.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    file: FileFetcher,
    http: HttpFetcher,
}

impl Loader {
    pub fn new(http: HttpFetcher) -> Self {
        Self {
            file: FileFetcher,
            http,
        }
    }

    /// Fetch the raw bytes for a classified source.
    pub fn fetch(&self, source: &ArtSource) -> Result<Vec<u8>, ArtError> {
        let fetcher: &dyn Fetch = match source {
            ArtSource::Local(_) => &self.file,
            ArtSource::Remote(_) => &self.http,
        };
        fetcher.fetch(source.location())
    }

    /// Classify, fetch and decode `uri`.
    pub fn load(&self, uri: &str) -> Result<RgbImage, ArtError> {
        let source = ArtSource::parse(uri)?;
        let bytes = self.fetch(&source)?;
        decode_image(&bytes)
    }
}
