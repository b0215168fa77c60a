//! Mip-aware upload of [`TextureSource`]s to a GPU.
//!
//! The device is abstracted behind [`GpuDevice`]: creating a texture and
//! writing linear texel data into one of its levels is all the uploader
//! needs. Enable the `wgpu` feature for a ready-made implementation over
//! `wgpu::Device` and `wgpu::Queue`.
//!
//! ```
//! use texload_format::{
//!     format_layout_info, Extent3d, LevelLayout, ShapeCounts, TextureDimension, TextureFormat,
//!     TextureSource,
//! };
//! use texload_upload::{upload_all_levels, RecordingDevice, TextureUsages};
//! # use std::borrow::Cow;
//!
//! struct Checker;
//!
//! impl TextureSource for Checker {
//!     fn format(&self) -> TextureFormat { TextureFormat::Rgba8Unorm }
//!     fn dimension(&self) -> TextureDimension { TextureDimension::D2 }
//!     fn level_count(&self) -> u32 { 1 }
//!     fn extent(&self) -> Extent3d { Extent3d::new(2, 2, 1) }
//!     fn level_data(&self, _mip: u32) -> texload_format::Result<Cow<'_, [u8]>> {
//!         Ok(Cow::Owned(vec![0xff; 16]))
//!     }
//!     fn level_layout(&self, mip: u32) -> texload_format::Result<LevelLayout> {
//!         let info = format_layout_info(self.format()).unwrap();
//!         LevelLayout::compute(info, &ShapeCounts::image_2d(2, 2), mip)
//!     }
//! }
//!
//! let device = RecordingDevice::new();
//! upload_all_levels(&Checker, &device, TextureUsages::TEXTURE_BINDING)?;
//! assert_eq!(device.writes().len(), 1);
//! # Ok::<(), texload_upload::UploadError>(())
//! ```

mod device;
mod error;
mod plan;
mod recording;
mod upload;
#[cfg(feature = "wgpu")]
mod wgpu_device;

pub use device::{
    GpuDevice, Origin3d, TexelCopyTexture, TextureAspect, TextureDescriptor, TextureUsages,
};
pub use error::{Result, UploadError};
pub use plan::{LevelUpload, UploadOptions, UploadPlan};
pub use recording::{DeviceCall, RecordingDevice, TextureId};
pub use upload::{upload_all_levels, upload_with_options};
#[cfg(feature = "wgpu")]
pub use wgpu_device::{to_wgpu_format, WgpuDevice};

pub use texload_format::TextureSource;
