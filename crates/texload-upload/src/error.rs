//! Error types for texture uploads.

use thiserror::Error;

/// Errors that can occur while planning an upload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error(transparent)]
    Source(#[from] texload_format::Error),

    #[error("mip level {mip} holds {actual} bytes, layout needs {expected}")]
    LevelSizeMismatch { mip: u32, expected: u64, actual: u64 },
}

/// Result type for upload operations.
pub type Result<T> = std::result::Result<T, UploadError>;
