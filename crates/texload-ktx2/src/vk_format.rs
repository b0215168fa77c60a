//! Vulkan format codes used by the KTX2 `vkFormat` field.

use texload_format::TextureFormat;

/// Map a `VkFormat` value to a texture format.
///
/// Returns `None` for codes with no counterpart (packed 24-bit RGB, scaled
/// integer formats, 64-bit channels and so on).
pub const fn texture_format_from_vk(vk_format: u32) -> Option<TextureFormat> {
    use TextureFormat::*;

    let format = match vk_format {
        9 => R8Unorm,   // VK_FORMAT_R8_UNORM
        10 => R8Snorm,  // VK_FORMAT_R8_SNORM
        13 => R8Uint,   // VK_FORMAT_R8_UINT
        14 => R8Sint,   // VK_FORMAT_R8_SINT
        16 => Rg8Unorm, // VK_FORMAT_R8G8_UNORM
        17 => Rg8Snorm,
        20 => Rg8Uint,
        21 => Rg8Sint,
        37 => Rgba8Unorm, // VK_FORMAT_R8G8B8A8_UNORM
        38 => Rgba8Snorm,
        41 => Rgba8Uint,
        42 => Rgba8Sint,
        43 => Rgba8UnormSrgb,
        44 => Bgra8Unorm, // VK_FORMAT_B8G8R8A8_UNORM
        50 => Bgra8UnormSrgb,
        64 => Rgb10a2Unorm, // VK_FORMAT_A2B10G10R10_UNORM_PACK32
        68 => Rgb10a2Uint,
        74 => R16Uint, // VK_FORMAT_R16_UINT
        75 => R16Sint,
        76 => R16Float,
        81 => Rg16Uint, // VK_FORMAT_R16G16_UINT
        82 => Rg16Sint,
        83 => Rg16Float,
        95 => Rgba16Uint, // VK_FORMAT_R16G16B16A16_UINT
        96 => Rgba16Sint,
        97 => Rgba16Float,
        98 => R32Uint, // VK_FORMAT_R32_UINT
        99 => R32Sint,
        100 => R32Float,
        101 => Rg32Uint, // VK_FORMAT_R32G32_UINT
        102 => Rg32Sint,
        103 => Rg32Float,
        107 => Rgba32Uint, // VK_FORMAT_R32G32B32A32_UINT
        108 => Rgba32Sint,
        109 => Rgba32Float,
        122 => Rg11b10Ufloat, // VK_FORMAT_B10G11R11_UFLOAT_PACK32
        123 => Rgb9e5Ufloat,  // VK_FORMAT_E5B9G9R9_UFLOAT_PACK32
        124 => Depth16Unorm,
        125 => Depth24Plus, // VK_FORMAT_X8_D24_UNORM_PACK32
        126 => Depth32Float,
        127 => Stencil8,
        129 => Depth24PlusStencil8,
        130 => Depth32FloatStencil8,
        // BC1 without alpha decodes with opaque alpha in the RGBA variant.
        131 | 133 => Bc1RgbaUnorm,
        132 | 134 => Bc1RgbaUnormSrgb,
        135 => Bc2RgbaUnorm,
        136 => Bc2RgbaUnormSrgb,
        137 => Bc3RgbaUnorm,
        138 => Bc3RgbaUnormSrgb,
        139 => Bc4RUnorm,
        140 => Bc4RSnorm,
        141 => Bc5RgUnorm,
        142 => Bc5RgSnorm,
        143 => Bc6hRgbUfloat,
        144 => Bc6hRgbFloat,
        145 => Bc7RgbaUnorm,
        146 => Bc7RgbaUnormSrgb,
        147 => Etc2Rgb8Unorm,
        148 => Etc2Rgb8UnormSrgb,
        149 => Etc2Rgb8A1Unorm,
        150 => Etc2Rgb8A1UnormSrgb,
        151 => Etc2Rgba8Unorm,
        152 => Etc2Rgba8UnormSrgb,
        153 => EacR11Unorm,
        154 => EacR11Snorm,
        155 => EacRg11Unorm,
        156 => EacRg11Snorm,
        157 => Astc4x4Unorm,
        158 => Astc4x4UnormSrgb,
        159 => Astc5x4Unorm,
        160 => Astc5x4UnormSrgb,
        161 => Astc5x5Unorm,
        162 => Astc5x5UnormSrgb,
        163 => Astc6x5Unorm,
        164 => Astc6x5UnormSrgb,
        165 => Astc6x6Unorm,
        166 => Astc6x6UnormSrgb,
        167 => Astc8x5Unorm,
        168 => Astc8x5UnormSrgb,
        169 => Astc8x6Unorm,
        170 => Astc8x6UnormSrgb,
        171 => Astc8x8Unorm,
        172 => Astc8x8UnormSrgb,
        173 => Astc10x5Unorm,
        174 => Astc10x5UnormSrgb,
        175 => Astc10x6Unorm,
        176 => Astc10x6UnormSrgb,
        177 => Astc10x8Unorm,
        178 => Astc10x8UnormSrgb,
        179 => Astc10x10Unorm,
        180 => Astc10x10UnormSrgb,
        181 => Astc12x10Unorm,
        182 => Astc12x10UnormSrgb,
        183 => Astc12x12Unorm,
        184 => Astc12x12UnormSrgb,
        _ => return None,
    };
    Some(format)
}
