//! Error types shared by every texture source.

use thiserror::Error;

use crate::TextureFormat;

/// Errors raised while resolving texture layouts or reading levels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The format has no linear layout and cannot be filled by a buffer copy.
    #[error("texture format {0:?} cannot be copied to or from a buffer")]
    FormatNotCopyable(TextureFormat),

    /// The header dimension counts do not describe any valid texture shape.
    #[error(
        "not a valid texture shape: {width}x{height}x{depth}, {layer_count} layers, {face_count} faces"
    )]
    InvalidShape {
        width: u32,
        height: u32,
        depth: u32,
        layer_count: u32,
        face_count: u32,
    },

    /// Requested mip level beyond the level count.
    #[error("mip level {mip} out of range (level count: {level_count})")]
    IndexOutOfRange { mip: u32, level_count: u32 },

    /// Level payload is supercompressed with a scheme that cannot be decoded.
    #[error("unsupported supercompression scheme {0}")]
    UnsupportedCompression(u32),

    /// A mip level's row pitch, extent or byte size does not fit the
    /// integer widths a buffer copy uses.
    #[error("layout of mip level {mip} overflows")]
    LayoutOverflow { mip: u32 },

    /// Extent is not a whole number of texel blocks.
    #[error("extent {width}x{height} is not a multiple of the {block_width}x{block_height} block size")]
    UnalignedExtent {
        width: u32,
        height: u32,
        block_width: u32,
        block_height: u32,
    },
}

/// Result type for texture layout operations.
pub type Result<T> = std::result::Result<T, Error>;
