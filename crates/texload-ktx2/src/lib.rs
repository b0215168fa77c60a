//! KTX2 texture container decoding.
//!
//! A KTX2 file is a fixed 80-byte header (12-byte identifier included)
//! followed by a level index of 24-byte entries, a data format descriptor,
//! key/value data and the level payloads. This crate validates the header,
//! resolves the `vkFormat` code to a [`TextureFormat`](texload_format::TextureFormat)
//! and exposes each mip level as a read-only view into the owned container
//! bytes through [`TextureSource`](texload_format::TextureSource).
//!
//! Supercompressed containers (BasisLZ, Zstandard, zlib) are rejected.
//!
//! # Level order
//!
//! Level index entries are exposed base level first: `level(0)` is always
//! the largest mip. Files do not agree on how they store the index, so it
//! is normalized at decode time against the byte size each mip must have
//! (see [`LevelLayout`](texload_format::LevelLayout)):
//!
//! - If the entry lengths, read in file order, equal the expected sizes of
//!   mips `0, 1, 2, ...` and the reversed entry lengths do not, the index
//!   is kept as stored.
//! - In every other case, including when both orders match or neither
//!   does, the index is taken as smallest mip first and reversed.
//!
//! A texture whose expected level sizes overflow is rejected with
//! [`texload_format::Error::LayoutOverflow`]. A header level count larger
//! than the file can hold fails with [`Error::TruncatedData`].
//!
//! # Example
//!
//! ```no_run
//! use texload_format::TextureSource;
//! use texload_ktx2::Ktx2Texture;
//!
//! let texture = Ktx2Texture::open("path/to/texture.ktx2")?;
//! for mip in 0..texture.level_count() {
//!     let layout = texture.level_layout(mip)?;
//!     println!("mip {mip}: {} bytes per row", layout.layout.bytes_per_row);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod header;
mod texture;
mod vk_format;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use header::{
    Ktx2Header, LevelIndex, RawHeader, RawLevelIndex, SupercompressionScheme, KTX2_MAGIC,
};
pub use texture::{decode_container, Ktx2Texture};
pub use vk_format::texture_format_from_vk;
