//! [`GpuDevice`] over a `wgpu` device and queue.

use texload_format::{Extent3d, TextureDataLayout, TextureDimension, TextureFormat};

use crate::device::{GpuDevice, TexelCopyTexture, TextureAspect, TextureDescriptor};

/// Borrowed `wgpu` device and queue.
#[derive(Debug, Clone, Copy)]
pub struct WgpuDevice<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
}

impl<'a> WgpuDevice<'a> {
    pub fn new(device: &'a wgpu::Device, queue: &'a wgpu::Queue) -> Self {
        Self { device, queue }
    }
}

impl GpuDevice for WgpuDevice<'_> {
    type Texture = wgpu::Texture;

    fn create_texture(&self, descriptor: &TextureDescriptor<'_>) -> wgpu::Texture {
        let view_formats: Vec<wgpu::TextureFormat> = descriptor
            .view_formats
            .iter()
            .map(|&format| to_wgpu_format(format))
            .collect();

        self.device.create_texture(&wgpu::TextureDescriptor {
            label: descriptor.label.as_deref(),
            size: to_wgpu_extent(descriptor.size),
            mip_level_count: descriptor.mip_level_count,
            sample_count: descriptor.sample_count,
            dimension: match descriptor.dimension {
                TextureDimension::D1 => wgpu::TextureDimension::D1,
                TextureDimension::D2 => wgpu::TextureDimension::D2,
                TextureDimension::D3 => wgpu::TextureDimension::D3,
            },
            format: to_wgpu_format(descriptor.format),
            usage: wgpu::TextureUsages::from_bits_truncate(descriptor.usage.bits()),
            view_formats: &view_formats,
        })
    }

    fn write_texture(
        &self,
        destination: TexelCopyTexture<'_, wgpu::Texture>,
        data: &[u8],
        layout: TextureDataLayout,
        size: Extent3d,
    ) {
        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: destination.texture,
                mip_level: destination.mip_level,
                origin: wgpu::Origin3d {
                    x: destination.origin.x,
                    y: destination.origin.y,
                    z: destination.origin.z,
                },
                aspect: match destination.aspect {
                    TextureAspect::All => wgpu::TextureAspect::All,
                    TextureAspect::StencilOnly => wgpu::TextureAspect::StencilOnly,
                    TextureAspect::DepthOnly => wgpu::TextureAspect::DepthOnly,
                },
            },
            data,
            wgpu::TexelCopyBufferLayout {
                offset: layout.offset,
                bytes_per_row: Some(layout.bytes_per_row),
                rows_per_image: Some(layout.rows_per_image),
            },
            to_wgpu_extent(size),
        );
    }
}

fn to_wgpu_extent(extent: Extent3d) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: extent.width,
        height: extent.height,
        depth_or_array_layers: extent.depth_or_array_layers,
    }
}

/// Map a texture format to its `wgpu` counterpart.
pub fn to_wgpu_format(format: TextureFormat) -> wgpu::TextureFormat {
    use wgpu::{AstcBlock as B, AstcChannel as C, TextureFormat as W};
    use TextureFormat::*;

    let astc = |block, channel| W::Astc { block, channel };

    match format {
        R8Unorm => W::R8Unorm,
        R8Snorm => W::R8Snorm,
        R8Uint => W::R8Uint,
        R8Sint => W::R8Sint,
        R16Uint => W::R16Uint,
        R16Sint => W::R16Sint,
        R16Float => W::R16Float,
        Rg8Unorm => W::Rg8Unorm,
        Rg8Snorm => W::Rg8Snorm,
        Rg8Uint => W::Rg8Uint,
        Rg8Sint => W::Rg8Sint,
        R32Float => W::R32Float,
        R32Uint => W::R32Uint,
        R32Sint => W::R32Sint,
        Rg16Uint => W::Rg16Uint,
        Rg16Sint => W::Rg16Sint,
        Rg16Float => W::Rg16Float,
        Rgba8Unorm => W::Rgba8Unorm,
        Rgba8UnormSrgb => W::Rgba8UnormSrgb,
        Rgba8Snorm => W::Rgba8Snorm,
        Rgba8Uint => W::Rgba8Uint,
        Rgba8Sint => W::Rgba8Sint,
        Bgra8Unorm => W::Bgra8Unorm,
        Bgra8UnormSrgb => W::Bgra8UnormSrgb,
        Rgb10a2Uint => W::Rgb10a2Uint,
        Rgb10a2Unorm => W::Rgb10a2Unorm,
        Rg11b10Ufloat => W::Rg11b10Ufloat,
        Rgb9e5Ufloat => W::Rgb9e5Ufloat,
        Rg32Float => W::Rg32Float,
        Rg32Uint => W::Rg32Uint,
        Rg32Sint => W::Rg32Sint,
        Rgba16Uint => W::Rgba16Uint,
        Rgba16Sint => W::Rgba16Sint,
        Rgba16Float => W::Rgba16Float,
        Rgba32Float => W::Rgba32Float,
        Rgba32Uint => W::Rgba32Uint,
        Rgba32Sint => W::Rgba32Sint,
        Stencil8 => W::Stencil8,
        Depth16Unorm => W::Depth16Unorm,
        Depth24Plus => W::Depth24Plus,
        Depth24PlusStencil8 => W::Depth24PlusStencil8,
        Depth32Float => W::Depth32Float,
        Depth32FloatStencil8 => W::Depth32FloatStencil8,
        Bc1RgbaUnorm => W::Bc1RgbaUnorm,
        Bc1RgbaUnormSrgb => W::Bc1RgbaUnormSrgb,
        Bc2RgbaUnorm => W::Bc2RgbaUnorm,
        Bc2RgbaUnormSrgb => W::Bc2RgbaUnormSrgb,
        Bc3RgbaUnorm => W::Bc3RgbaUnorm,
        Bc3RgbaUnormSrgb => W::Bc3RgbaUnormSrgb,
        Bc4RUnorm => W::Bc4RUnorm,
        Bc4RSnorm => W::Bc4RSnorm,
        Bc5RgUnorm => W::Bc5RgUnorm,
        Bc5RgSnorm => W::Bc5RgSnorm,
        Bc6hRgbUfloat => W::Bc6hRgbUfloat,
        Bc6hRgbFloat => W::Bc6hRgbFloat,
        Bc7RgbaUnorm => W::Bc7RgbaUnorm,
        Bc7RgbaUnormSrgb => W::Bc7RgbaUnormSrgb,
        Etc2Rgb8Unorm => W::Etc2Rgb8Unorm,
        Etc2Rgb8UnormSrgb => W::Etc2Rgb8UnormSrgb,
        Etc2Rgb8A1Unorm => W::Etc2Rgb8A1Unorm,
        Etc2Rgb8A1UnormSrgb => W::Etc2Rgb8A1UnormSrgb,
        Etc2Rgba8Unorm => W::Etc2Rgba8Unorm,
        Etc2Rgba8UnormSrgb => W::Etc2Rgba8UnormSrgb,
        EacR11Unorm => W::EacR11Unorm,
        EacR11Snorm => W::EacR11Snorm,
        EacRg11Unorm => W::EacRg11Unorm,
        EacRg11Snorm => W::EacRg11Snorm,
        Astc4x4Unorm => astc(B::B4x4, C::Unorm),
        Astc4x4UnormSrgb => astc(B::B4x4, C::UnormSrgb),
        Astc5x4Unorm => astc(B::B5x4, C::Unorm),
        Astc5x4UnormSrgb => astc(B::B5x4, C::UnormSrgb),
        Astc5x5Unorm => astc(B::B5x5, C::Unorm),
        Astc5x5UnormSrgb => astc(B::B5x5, C::UnormSrgb),
        Astc6x5Unorm => astc(B::B6x5, C::Unorm),
        Astc6x5UnormSrgb => astc(B::B6x5, C::UnormSrgb),
        Astc6x6Unorm => astc(B::B6x6, C::Unorm),
        Astc6x6UnormSrgb => astc(B::B6x6, C::UnormSrgb),
        Astc8x5Unorm => astc(B::B8x5, C::Unorm),
        Astc8x5UnormSrgb => astc(B::B8x5, C::UnormSrgb),
        Astc8x6Unorm => astc(B::B8x6, C::Unorm),
        Astc8x6UnormSrgb => astc(B::B8x6, C::UnormSrgb),
        Astc8x8Unorm => astc(B::B8x8, C::Unorm),
        Astc8x8UnormSrgb => astc(B::B8x8, C::UnormSrgb),
        Astc10x5Unorm => astc(B::B10x5, C::Unorm),
        Astc10x5UnormSrgb => astc(B::B10x5, C::UnormSrgb),
        Astc10x6Unorm => astc(B::B10x6, C::Unorm),
        Astc10x6UnormSrgb => astc(B::B10x6, C::UnormSrgb),
        Astc10x8Unorm => astc(B::B10x8, C::Unorm),
        Astc10x8UnormSrgb => astc(B::B10x8, C::UnormSrgb),
        Astc10x10Unorm => astc(B::B10x10, C::Unorm),
        Astc10x10UnormSrgb => astc(B::B10x10, C::UnormSrgb),
        Astc12x10Unorm => astc(B::B12x10, C::Unorm),
        Astc12x10UnormSrgb => astc(B::B12x10, C::UnormSrgb),
        Astc12x12Unorm => astc(B::B12x12, C::Unorm),
        Astc12x12UnormSrgb => astc(B::B12x12, C::UnormSrgb),
    }
}
