//! Errors from format-sniffing loads.

use thiserror::Error;

/// Errors from [`load`](crate::load) and [`open`](crate::open).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("KTX2: {0}")]
    Ktx2(#[from] texload_ktx2::Error),

    #[error("image: {0}")]
    Image(#[from] texload_image::Error),
}

/// Result type for loads.
pub type Result<T> = std::result::Result<T, LoadError>;
