//! Error types for artwork conversion.

use std::path::PathBuf;

/// Errors that can occur while turning an artwork URI into ASCII lines.
///
/// Every variant is terminal for a single conversion; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ArtError {
    /// The URI was empty or contained only whitespace.
    #[error("Empty URI")]
    EmptyInput,

    /// The URI could not be parsed.
    #[error("Failed to parse URI '{uri}': {source}")]
    UriParse {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP request failed or returned a non-success status.
    #[error("Failed to fetch '{uri}': {source}")]
    Network {
        uri: String,
        #[source]
        source: reqwest::Error,
    },

    /// The local file could not be opened or read.
    #[error("Failed to read '{}': {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not a supported image or are corrupt.
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

impl ArtError {
    /// Short machine-friendly name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ArtError::EmptyInput => "empty-uri",
            ArtError::UriParse { .. } => "uri-parse",
            ArtError::Network { .. } => "network",
            ArtError::Filesystem { .. } => "filesystem",
            ArtError::Decode(_) => "decode",
        }
    }
}
