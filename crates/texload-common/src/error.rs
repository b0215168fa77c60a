//! Error types for texload-common.

use thiserror::Error;

/// Error raised by [`BinaryReader`](crate::BinaryReader).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A read ran past the end of the buffer.
    #[error("unexpected end of buffer: {needed} bytes at offset {offset}, buffer holds {len}")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        len: usize,
    },
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
