//! Plain image texture sources.
//!
//! Anything the `image` crate can decode (PNG, JPEG, BMP) becomes a single
//! level, 2D, RGBA8 [`TextureSource`](texload_format::TextureSource).
//!
//! # Example
//!
//! ```no_run
//! use texload_format::TextureSource;
//! use texload_image::StandardImage;
//!
//! let image = StandardImage::open("path/to/albedo.png")?;
//! assert_eq!(image.level_count(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod standard;

pub use error::{Error, Result};
pub use standard::StandardImage;
