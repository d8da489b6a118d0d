//! Error types for Blobkit

use thiserror::Error;

/// Result type alias using Blobkit's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Blobkit operations
///
/// The generators themselves never fail; these cover the surfaces around
/// them (colours, canvas commands, file export).
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Colour string is not a `#RRGGBB` hex colour
    #[error("Invalid color: {0:?} (expected #RRGGBB)")]
    InvalidColor(String),

    /// Canvas command addressed a blob that does not exist
    #[error("Blob {index} not found (canvas holds {count})")]
    BlobNotFound { index: usize, count: usize },

    /// Export failed
    #[error("Export failed: {0}")]
    Export(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Canvas document (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
