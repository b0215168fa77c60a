//! Texture formats and their texel block layouts.

/// A concrete GPU texture format.
///
/// Variant names follow the WebGPU naming scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum TextureFormat {
    // 8-bit
    R8Unorm,
    R8Snorm,
    R8Uint,
    R8Sint,
    // 16-bit
    R16Uint,
    R16Sint,
    R16Float,
    Rg8Unorm,
    Rg8Snorm,
    Rg8Uint,
    Rg8Sint,
    // 32-bit
    R32Float,
    R32Uint,
    R32Sint,
    Rg16Uint,
    Rg16Sint,
    Rg16Float,
    Rgba8Unorm,
    Rgba8UnormSrgb,
    Rgba8Snorm,
    Rgba8Uint,
    Rgba8Sint,
    Bgra8Unorm,
    Bgra8UnormSrgb,
    Rgb10a2Uint,
    Rgb10a2Unorm,
    Rg11b10Ufloat,
    Rgb9e5Ufloat,
    // 64-bit
    Rg32Float,
    Rg32Uint,
    Rg32Sint,
    Rgba16Uint,
    Rgba16Sint,
    Rgba16Float,
    // 128-bit
    Rgba32Float,
    Rgba32Uint,
    Rgba32Sint,
    // Depth/stencil
    Stencil8,
    Depth16Unorm,
    Depth24Plus,
    Depth24PlusStencil8,
    Depth32Float,
    Depth32FloatStencil8,
    // BC
    Bc1RgbaUnorm,
    Bc1RgbaUnormSrgb,
    Bc2RgbaUnorm,
    Bc2RgbaUnormSrgb,
    Bc3RgbaUnorm,
    Bc3RgbaUnormSrgb,
    Bc4RUnorm,
    Bc4RSnorm,
    Bc5RgUnorm,
    Bc5RgSnorm,
    Bc6hRgbUfloat,
    Bc6hRgbFloat,
    Bc7RgbaUnorm,
    Bc7RgbaUnormSrgb,
    // ETC2 / EAC
    Etc2Rgb8Unorm,
    Etc2Rgb8UnormSrgb,
    Etc2Rgb8A1Unorm,
    Etc2Rgb8A1UnormSrgb,
    Etc2Rgba8Unorm,
    Etc2Rgba8UnormSrgb,
    EacR11Unorm,
    EacR11Snorm,
    EacRg11Unorm,
    EacRg11Snorm,
    // ASTC
    Astc4x4Unorm,
    Astc4x4UnormSrgb,
    Astc5x4Unorm,
    Astc5x4UnormSrgb,
    Astc5x5Unorm,
    Astc5x5UnormSrgb,
    Astc6x5Unorm,
    Astc6x5UnormSrgb,
    Astc6x6Unorm,
    Astc6x6UnormSrgb,
    Astc8x5Unorm,
    Astc8x5UnormSrgb,
    Astc8x6Unorm,
    Astc8x6UnormSrgb,
    Astc8x8Unorm,
    Astc8x8UnormSrgb,
    Astc10x5Unorm,
    Astc10x5UnormSrgb,
    Astc10x6Unorm,
    Astc10x6UnormSrgb,
    Astc10x8Unorm,
    Astc10x8UnormSrgb,
    Astc10x10Unorm,
    Astc10x10UnormSrgb,
    Astc12x10Unorm,
    Astc12x10UnormSrgb,
    Astc12x12Unorm,
    Astc12x12UnormSrgb,
}

/// Texel block layout of a format as seen by a linear buffer copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatLayoutInfo {
    /// Bytes occupied by one texel block.
    pub block_footprint: u32,
    /// Width and height of one block in texels; `(1, 1)` for uncompressed formats.
    pub block_extent: (u32, u32),
}

impl FormatLayoutInfo {
    /// Block width in texels.
    #[inline]
    pub const fn block_width(&self) -> u32 {
        self.block_extent.0
    }

    /// Block height in texels.
    #[inline]
    pub const fn block_height(&self) -> u32 {
        self.block_extent.1
    }

    /// Whether a block covers more than one texel.
    #[inline]
    pub const fn is_block_compressed(&self) -> bool {
        self.block_extent.0 > 1 || self.block_extent.1 > 1
    }
}

/// Get the texel block layout of a format.
///
/// Returns `None` for formats that have no defined linear copy layout
/// (`Depth24Plus`, `Depth24PlusStencil8`, `Depth32FloatStencil8`); such
/// formats cannot be filled through a buffer-to-texture copy.
pub const fn format_layout_info(format: TextureFormat) -> Option<FormatLayoutInfo> {
    let block_footprint = match block_footprint(format) {
        Some(bytes) => bytes,
        None => return None,
    };
    Some(FormatLayoutInfo {
        block_footprint,
        block_extent: block_extent(format),
    })
}

const fn block_footprint(format: TextureFormat) -> Option<u32> {
    use TextureFormat::*;

    let bytes = match format {
        R8Unorm | R8Snorm | R8Uint | R8Sint | Stencil8 => 1,

        R16Uint | R16Sint | R16Float | Rg8Unorm | Rg8Snorm | Rg8Uint | Rg8Sint
        | Depth16Unorm => 2,

        R32Float | R32Uint | R32Sint | Rg16Uint | Rg16Sint | Rg16Float | Rgba8Unorm
        | Rgba8UnormSrgb | Rgba8Snorm | Rgba8Uint | Rgba8Sint | Bgra8Unorm | Bgra8UnormSrgb
        | Rgb10a2Uint | Rgb10a2Unorm | Rg11b10Ufloat | Rgb9e5Ufloat | Depth32Float => 4,

        Rg32Float | Rg32Uint | Rg32Sint | Rgba16Uint | Rgba16Sint | Rgba16Float => 8,

        Rgba32Float | Rgba32Uint | Rgba32Sint => 16,

        // No linear layout; the depth aspect of these is implementation defined.
        Depth24Plus | Depth24PlusStencil8 | Depth32FloatStencil8 => return None,

        Bc1RgbaUnorm | Bc1RgbaUnormSrgb | Bc4RUnorm | Bc4RSnorm => 8,
        Bc2RgbaUnorm | Bc2RgbaUnormSrgb | Bc3RgbaUnorm | Bc3RgbaUnormSrgb | Bc5RgUnorm
        | Bc5RgSnorm | Bc6hRgbUfloat | Bc6hRgbFloat | Bc7RgbaUnorm | Bc7RgbaUnormSrgb => 16,

        Etc2Rgb8Unorm | Etc2Rgb8UnormSrgb | Etc2Rgb8A1Unorm | Etc2Rgb8A1UnormSrgb
        | EacR11Unorm | EacR11Snorm => 8,
        Etc2Rgba8Unorm | Etc2Rgba8UnormSrgb | EacRg11Unorm | EacRg11Snorm => 16,

        // Every ASTC block is 128 bits regardless of its footprint in texels.
        Astc4x4Unorm | Astc4x4UnormSrgb | Astc5x4Unorm | Astc5x4UnormSrgb | Astc5x5Unorm
        | Astc5x5UnormSrgb | Astc6x5Unorm | Astc6x5UnormSrgb | Astc6x6Unorm
        | Astc6x6UnormSrgb | Astc8x5Unorm | Astc8x5UnormSrgb | Astc8x6Unorm
        | Astc8x6UnormSrgb | Astc8x8Unorm | Astc8x8UnormSrgb | Astc10x5Unorm
        | Astc10x5UnormSrgb | Astc10x6Unorm | Astc10x6UnormSrgb | Astc10x8Unorm
        | Astc10x8UnormSrgb | Astc10x10Unorm | Astc10x10UnormSrgb | Astc12x10Unorm
        | Astc12x10UnormSrgb | Astc12x12Unorm | Astc12x12UnormSrgb => 16,
    };
    Some(bytes)
}

const fn block_extent(format: TextureFormat) -> (u32, u32) {
    use TextureFormat::*;

    match format {
        Bc1RgbaUnorm | Bc1RgbaUnormSrgb | Bc2RgbaUnorm | Bc2RgbaUnormSrgb | Bc3RgbaUnorm
        | Bc3RgbaUnormSrgb | Bc4RUnorm | Bc4RSnorm | Bc5RgUnorm | Bc5RgSnorm
        | Bc6hRgbUfloat | Bc6hRgbFloat | Bc7RgbaUnorm | Bc7RgbaUnormSrgb => (4, 4),

        Etc2Rgb8Unorm | Etc2Rgb8UnormSrgb | Etc2Rgb8A1Unorm | Etc2Rgb8A1UnormSrgb
        | Etc2Rgba8Unorm | Etc2Rgba8UnormSrgb | EacR11Unorm | EacR11Snorm | EacRg11Unorm
        | EacRg11Snorm => (4, 4),

        Astc4x4Unorm | Astc4x4UnormSrgb => (4, 4),
        Astc5x4Unorm | Astc5x4UnormSrgb => (5, 4),
        Astc5x5Unorm | Astc5x5UnormSrgb => (5, 5),
        Astc6x5Unorm | Astc6x5UnormSrgb => (6, 5),
        Astc6x6Unorm | Astc6x6UnormSrgb => (6, 6),
        Astc8x5Unorm | Astc8x5UnormSrgb => (8, 5),
        Astc8x6Unorm | Astc8x6UnormSrgb => (8, 6),
        Astc8x8Unorm | Astc8x8UnormSrgb => (8, 8),
        Astc10x5Unorm | Astc10x5UnormSrgb => (10, 5),
        Astc10x6Unorm | Astc10x6UnormSrgb => (10, 6),
        Astc10x8Unorm | Astc10x8UnormSrgb => (10, 8),
        Astc10x10Unorm | Astc10x10UnormSrgb => (10, 10),
        Astc12x10Unorm | Astc12x10UnormSrgb => (12, 10),
        Astc12x12Unorm | Astc12x12UnormSrgb => (12, 12),

        _ => (1, 1),
    }
}

impl TextureFormat {
    /// Every format known to this crate.
    pub const ALL: &'static [TextureFormat] = &[
        Self::R8Unorm,
        Self::R8Snorm,
        Self::R8Uint,
        Self::R8Sint,
        Self::R16Uint,
        Self::R16Sint,
        Self::R16Float,
        Self::Rg8Unorm,
        Self::Rg8Snorm,
        Self::Rg8Uint,
        Self::Rg8Sint,
        Self::R32Float,
        Self::R32Uint,
        Self::R32Sint,
        Self::Rg16Uint,
        Self::Rg16Sint,
        Self::Rg16Float,
        Self::Rgba8Unorm,
        Self::Rgba8UnormSrgb,
        Self::Rgba8Snorm,
        Self::Rgba8Uint,
        Self::Rgba8Sint,
        Self::Bgra8Unorm,
        Self::Bgra8UnormSrgb,
        Self::Rgb10a2Uint,
        Self::Rgb10a2Unorm,
        Self::Rg11b10Ufloat,
        Self::Rgb9e5Ufloat,
        Self::Rg32Float,
        Self::Rg32Uint,
        Self::Rg32Sint,
        Self::Rgba16Uint,
        Self::Rgba16Sint,
        Self::Rgba16Float,
        Self::Rgba32Float,
        Self::Rgba32Uint,
        Self::Rgba32Sint,
        Self::Stencil8,
        Self::Depth16Unorm,
        Self::Depth24Plus,
        Self::Depth24PlusStencil8,
        Self::Depth32Float,
        Self::Depth32FloatStencil8,
        Self::Bc1RgbaUnorm,
        Self::Bc1RgbaUnormSrgb,
        Self::Bc2RgbaUnorm,
        Self::Bc2RgbaUnormSrgb,
        Self::Bc3RgbaUnorm,
        Self::Bc3RgbaUnormSrgb,
        Self::Bc4RUnorm,
        Self::Bc4RSnorm,
        Self::Bc5RgUnorm,
        Self::Bc5RgSnorm,
        Self::Bc6hRgbUfloat,
        Self::Bc6hRgbFloat,
        Self::Bc7RgbaUnorm,
        Self::Bc7RgbaUnormSrgb,
        Self::Etc2Rgb8Unorm,
        Self::Etc2Rgb8UnormSrgb,
        Self::Etc2Rgb8A1Unorm,
        Self::Etc2Rgb8A1UnormSrgb,
        Self::Etc2Rgba8Unorm,
        Self::Etc2Rgba8UnormSrgb,
        Self::EacR11Unorm,
        Self::EacR11Snorm,
        Self::EacRg11Unorm,
        Self::EacRg11Snorm,
        Self::Astc4x4Unorm,
        Self::Astc4x4UnormSrgb,
        Self::Astc5x4Unorm,
        Self::Astc5x4UnormSrgb,
        Self::Astc5x5Unorm,
        Self::Astc5x5UnormSrgb,
        Self::Astc6x5Unorm,
        Self::Astc6x5UnormSrgb,
        Self::Astc6x6Unorm,
        Self::Astc6x6UnormSrgb,
        Self::Astc8x5Unorm,
        Self::Astc8x5UnormSrgb,
        Self::Astc8x6Unorm,
        Self::Astc8x6UnormSrgb,
        Self::Astc8x8Unorm,
        Self::Astc8x8UnormSrgb,
        Self::Astc10x5Unorm,
        Self::Astc10x5UnormSrgb,
        Self::Astc10x6Unorm,
        Self::Astc10x6UnormSrgb,
        Self::Astc10x8Unorm,
        Self::Astc10x8UnormSrgb,
        Self::Astc10x10Unorm,
        Self::Astc10x10UnormSrgb,
        Self::Astc12x10Unorm,
        Self::Astc12x10UnormSrgb,
        Self::Astc12x12Unorm,
        Self::Astc12x12UnormSrgb,
    ];

    /// Get the texel block layout of this format.
    #[inline]
    pub const fn layout_info(self) -> Option<FormatLayoutInfo> {
        format_layout_info(self)
    }

    /// Whether this format can be filled through a linear buffer copy.
    #[inline]
    pub const fn is_copyable(self) -> bool {
        block_footprint(self).is_some()
    }
}
