//! Error types for plain image sources.

use thiserror::Error;

/// Errors that can occur when loading a plain image.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// The image has no pixels.
    #[error("image has zero size: {width}x{height}")]
    Empty { width: u32, height: u32 },

    /// Pixel buffer does not match the dimensions.
    #[error("pixel buffer size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, Error>;
