//! Plain value types shared between decoders and the upload path.

/// Storage dimension of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextureDimension {
    /// One-dimensional texture.
    D1,
    /// Two-dimensional texture.
    D2,
    /// Three-dimensional texture.
    D3,
}

/// Shape a texture is interpreted as when creating a sampling view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextureViewDimension {
    /// One-dimensional view.
    D1,
    /// Two-dimensional view.
    D2,
    /// Array of two-dimensional layers.
    D2Array,
    /// Cube map (six faces).
    Cube,
    /// Array of cube maps.
    CubeArray,
    /// Three-dimensional view.
    D3,
}

/// Size of a texture region, in texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent3d {
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
    /// Depth of a 3D texture, or the layer count of an array texture.
    pub depth_or_array_layers: u32,
}

impl Extent3d {
    /// Construct an extent.
    #[inline]
    pub const fn new(width: u32, height: u32, depth_or_array_layers: u32) -> Self {
        Self {
            width,
            height,
            depth_or_array_layers,
        }
    }
}

/// Layout of texel data in a linear buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextureDataLayout {
    /// Offset of the first block in the buffer.
    pub offset: u64,
    /// Byte stride between consecutive rows of texel blocks.
    pub bytes_per_row: u32,
    /// Number of block rows in one image (slice).
    pub rows_per_image: u32,
}
