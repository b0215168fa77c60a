//! Upload planning: gather and validate every level before touching a device.

use std::borrow::Cow;

use texload_format::{Extent3d, TextureDataLayout, TextureSource};
use tracing::{debug, trace, warn};

use crate::device::{GpuDevice, TexelCopyTexture, TextureDescriptor, TextureUsages};
use crate::{Result, UploadError};

/// Caller-side knobs for an upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOptions<'a> {
    /// Debug label for the created texture.
    pub label: Option<&'a str>,
    /// Upload only this many levels, base first. Clamped to
    /// `1..=level_count`.
    pub mip_count: Option<u32>,
    /// Requested usage. `COPY_DST` is always added.
    pub usage: TextureUsages,
}

impl<'a> UploadOptions<'a> {
    pub fn with_usage(usage: TextureUsages) -> Self {
        Self {
            usage,
            ..Self::default()
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn mip_count(mut self, mip_count: u32) -> Self {
        self.mip_count = Some(mip_count);
        self
    }
}

/// One level ready for `write_texture`.
#[derive(Debug, Clone)]
pub struct LevelUpload<'a> {
    pub mip: u32,
    pub data: Cow<'a, [u8]>,
    pub layout: TextureDataLayout,
    pub extent: Extent3d,
}

/// A validated sequence of level uploads plus the texture they go into.
#[derive(Debug, Clone)]
pub struct UploadPlan<'a> {
    pub descriptor: TextureDescriptor<'a>,
    pub levels: Vec<LevelUpload<'a>>,
}

impl<'a> UploadPlan<'a> {
    /// Collect every level's bytes and layout from `source`.
    ///
    /// Fails on the first level that cannot be read or whose payload is
    /// smaller than its layout requires. Nothing is created on failure.
    pub fn build<S>(source: &'a S, options: &UploadOptions<'a>) -> Result<Self>
    where
        S: TextureSource + ?Sized,
    {
        let available = source.level_count().max(1);
        let mip_count = options
            .mip_count
            .map_or(available, |requested| requested.clamp(1, available));

        let mut levels = Vec::with_capacity(mip_count as usize);
        for mip in 0..mip_count {
            let level = source.level_layout(mip)?;
            let data = source.level_data(mip)?;

            let expected = level
                .byte_size()
                .ok_or(texload_format::Error::LayoutOverflow { mip })?;
            let actual = data.len() as u64;
            if actual < expected {
                return Err(UploadError::LevelSizeMismatch {
                    mip,
                    expected,
                    actual,
                });
            }
            if actual > expected {
                warn!(mip, expected, actual, "level payload larger than its layout");
            }

            levels.push(LevelUpload {
                mip,
                data,
                layout: level.layout,
                extent: level.extent,
            });
        }

        let format = source.format();
        let descriptor = TextureDescriptor {
            label: options.label.map(Cow::Borrowed),
            usage: options.usage | TextureUsages::COPY_DST,
            dimension: source.dimension(),
            size: source.extent(),
            format,
            mip_level_count: mip_count,
            sample_count: 1,
            view_formats: vec![format],
        };

        debug!(
            ?format,
            mip_count,
            available,
            bytes = levels.iter().map(|l| l.data.len()).sum::<usize>(),
            "planned texture upload"
        );

        Ok(Self { descriptor, levels })
    }

    /// Total payload bytes across all levels.
    pub fn total_bytes(&self) -> u64 {
        self.levels.iter().map(|level| level.data.len() as u64).sum()
    }

    /// Create the texture and write every level into it.
    pub fn submit<D: GpuDevice + ?Sized>(&self, device: &D) -> D::Texture {
        let texture = device.create_texture(&self.descriptor);
        for level in &self.levels {
            trace!(
                mip = level.mip,
                bytes_per_row = level.layout.bytes_per_row,
                rows_per_image = level.layout.rows_per_image,
                width = level.extent.width,
                height = level.extent.height,
                depth_or_array_layers = level.extent.depth_or_array_layers,
                "writing level"
            );
            device.write_texture(
                TexelCopyTexture::level(&texture, level.mip),
                &level.data,
                level.layout,
                level.extent,
            );
        }
        texture
    }
}
