//! Texture formats, texel block layouts and the texture source contract.
//!
//! This crate is the leaf of the texload workspace. It knows nothing about
//! container formats or GPUs; it answers three questions:
//!
//! - How are texels of a [`TextureFormat`] packed into blocks?
//!   ([`format_layout_info`])
//! - What shape does a set of raw header counts describe? ([`ShapeCounts`])
//! - How is one mip level laid out in a linear upload buffer?
//!   ([`LevelLayout`])
//!
//! Decoders implement [`TextureSource`]; the uploader consumes it.
//!
//! # Example
//!
//! ```
//! use texload_format::{format_layout_info, LevelLayout, ShapeCounts, TextureFormat};
//!
//! let bc1 = format_layout_info(TextureFormat::Bc1RgbaUnorm).unwrap();
//! let level = LevelLayout::compute(bc1, &ShapeCounts::image_2d(256, 256), 0)?;
//!
//! assert_eq!(level.layout.bytes_per_row, 512);
//! assert_eq!(level.layout.rows_per_image, 64);
//! # Ok::<(), texload_format::Error>(())
//! ```

mod error;
mod format;
mod shape;
mod size;
mod source;
mod types;

pub use error::{Error, Result};
pub use format::{format_layout_info, FormatLayoutInfo, TextureFormat};
pub use shape::{mip_size, ShapeCounts};
pub use size::{block_count, infer_layout, LevelLayout};
pub use source::{check_mip, TextureSource};
pub use types::{Extent3d, TextureDataLayout, TextureDimension, TextureViewDimension};
