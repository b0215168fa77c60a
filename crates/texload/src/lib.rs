//! texload - texture container decoding and mip-aware GPU upload.
//!
//! This crate provides a unified interface to the texload workspace.
//!
//! # Crates
//!
//! - [`texload_common`] - Bounds-checked binary reading
//! - [`texload_format`] - Texture formats, block layouts, the [`TextureSource`] contract
//! - [`texload_ktx2`] - KTX2 container decoding
//! - [`texload_image`] - PNG/JPEG/BMP images as RGBA8 sources
//! - [`texload_upload`] - Upload planning and the [`GpuDevice`] boundary
//!
//! # Example
//!
//! ```no_run
//! use texload::prelude::*;
//!
//! let texture = texload::open("albedo.ktx2")?;
//! let device = RecordingDevice::new();
//! upload_all_levels(&texture, &device, TextureUsages::TEXTURE_BINDING)?;
//! println!("{} levels written", device.writes().len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod load;

pub use texload_common as common;
pub use texload_format as format;
pub use texload_image as image;
pub use texload_ktx2 as ktx2;
pub use texload_upload as upload;

pub use error::{LoadError, Result};
pub use load::{load, open, DynTextureSource};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use texload_format::{
        Extent3d, LevelLayout, TextureDataLayout, TextureDimension, TextureFormat, TextureSource,
        TextureViewDimension,
    };
    pub use texload_image::StandardImage;
    pub use texload_ktx2::{decode_container, Ktx2Texture};
    pub use texload_upload::{
        upload_all_levels, upload_with_options, GpuDevice, RecordingDevice, TextureUsages,
        UploadOptions, UploadPlan,
    };
}

pub use texload_format::TextureSource;
pub use texload_upload::GpuDevice;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
