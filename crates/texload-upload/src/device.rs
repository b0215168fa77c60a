//! The narrow slice of a GPU device the uploader talks to.

use std::borrow::Cow;

use bitflags::bitflags;
use texload_format::{Extent3d, TextureDataLayout, TextureDimension, TextureFormat};

bitflags! {
    /// Ways a texture may be used after creation.
    ///
    /// Bit values match WebGPU so they can be passed through unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextureUsages: u32 {
        const COPY_SRC = 1 << 0;
        const COPY_DST = 1 << 1;
        const TEXTURE_BINDING = 1 << 2;
        const STORAGE_BINDING = 1 << 3;
        const RENDER_ATTACHMENT = 1 << 4;
    }
}

/// Texel offset of a copy inside the destination texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Origin3d {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Origin3d {
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };
}

/// Aspect of a texture touched by a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureAspect {
    #[default]
    All,
    StencilOnly,
    DepthOnly,
}

/// Everything needed to create a texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureDescriptor<'a> {
    /// Debug label.
    pub label: Option<Cow<'a, str>>,
    pub usage: TextureUsages,
    pub dimension: TextureDimension,
    /// Size of mip 0, with depth or layer count in the third component.
    pub size: Extent3d,
    pub format: TextureFormat,
    pub mip_level_count: u32,
    pub sample_count: u32,
    /// Formats views of this texture may use.
    pub view_formats: Vec<TextureFormat>,
}

impl TextureDescriptor<'_> {
    /// Detach the descriptor from any borrowed label.
    pub fn into_owned(self) -> TextureDescriptor<'static> {
        TextureDescriptor {
            label: self.label.map(|label| Cow::Owned(label.into_owned())),
            usage: self.usage,
            dimension: self.dimension,
            size: self.size,
            format: self.format,
            mip_level_count: self.mip_level_count,
            sample_count: self.sample_count,
            view_formats: self.view_formats,
        }
    }
}

/// Destination of a buffer-to-texture write.
#[derive(Debug)]
pub struct TexelCopyTexture<'a, T> {
    pub texture: &'a T,
    pub mip_level: u32,
    pub origin: Origin3d,
    pub aspect: TextureAspect,
}

impl<'a, T> TexelCopyTexture<'a, T> {
    /// Whole-level destination at the origin of `mip_level`.
    pub fn level(texture: &'a T, mip_level: u32) -> Self {
        Self {
            texture,
            mip_level,
            origin: Origin3d::ZERO,
            aspect: TextureAspect::All,
        }
    }
}

/// A device that can create textures and write texel data into them.
///
/// Implementations forward to a real graphics API, or record the calls in
/// tests.
pub trait GpuDevice {
    /// Handle to a created texture.
    type Texture;

    /// Create a texture.
    fn create_texture(&self, descriptor: &TextureDescriptor<'_>) -> Self::Texture;

    /// Copy `data`, laid out as `layout`, into the `size` region of
    /// `destination`.
    fn write_texture(
        &self,
        destination: TexelCopyTexture<'_, Self::Texture>,
        data: &[u8],
        layout: TextureDataLayout,
        size: Extent3d,
    );
}

impl<D: GpuDevice + ?Sized> GpuDevice for &D {
    type Texture = D::Texture;

    fn create_texture(&self, descriptor: &TextureDescriptor<'_>) -> Self::Texture {
        (**self).create_texture(descriptor)
    }

    fn write_texture(
        &self,
        destination: TexelCopyTexture<'_, Self::Texture>,
        data: &[u8],
        layout: TextureDataLayout,
        size: Extent3d,
    ) {
        (**self).write_texture(destination, data, layout, size)
    }
}
