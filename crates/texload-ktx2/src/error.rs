//! Error types for KTX2 decoding.

use thiserror::Error;

/// Errors that can occur when decoding a KTX2 container.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The first 12 bytes are not the KTX2 identifier.
    #[error("invalid KTX2 identifier: got {actual:02X?}")]
    InvalidMagic { actual: Vec<u8> },

    /// The Vulkan format code has no matching texture format.
    #[error("unsupported vkFormat: {0}")]
    UnsupportedFormat(u32),

    /// A declared header, index or level range extends past the input.
    #[error("truncated data: {length} bytes at offset {offset} exceed the {available}-byte input")]
    TruncatedData {
        offset: u64,
        length: u64,
        available: usize,
    },

    /// Layout, shape, level or compression error.
    #[error(transparent)]
    Texture(#[from] texload_format::Error),
}

impl From<texload_common::Error> for Error {
    fn from(err: texload_common::Error) -> Self {
        match err {
            texload_common::Error::UnexpectedEof {
                offset,
                needed,
                len,
            } => Error::TruncatedData {
                offset: offset as u64,
                length: needed as u64,
                available: len,
            },
        }
    }
}

/// Result type for KTX2 operations.
pub type Result<T> = std::result::Result<T, Error>;
