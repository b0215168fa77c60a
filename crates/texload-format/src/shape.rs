//! Texture shape classification from raw container counts.
//!
//! Containers describe a texture with five overlapping integers (width,
//! height, depth, layer count, face count) where zero means "axis not
//! present". [`ShapeCounts`] turns those into the storage dimension, the
//! view dimension and the single `depth_or_array_layers` value a texture
//! creation call needs.

use crate::{Error, Extent3d, Result, TextureDimension, TextureViewDimension};

/// Raw dimension counts as stored in a container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeCounts {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub layer_count: u32,
    pub face_count: u32,
}

impl ShapeCounts {
    /// Counts for a plain 2D image with a single layer.
    pub const fn image_2d(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            depth: 0,
            layer_count: 0,
            face_count: 1,
        }
    }

    /// Storage dimension.
    ///
    /// Anything with faces, layers or depth is stored as a 3D texture.
    pub const fn dimension(&self) -> TextureDimension {
        if self.face_count > 1 || self.layer_count > 0 || self.depth > 0 {
            TextureDimension::D3
        } else if self.height > 0 {
            TextureDimension::D2
        } else {
            TextureDimension::D1
        }
    }

    /// View dimension.
    ///
    /// Branch order matters: cube shapes win over plain arrays, arrays over
    /// volumes, volumes over 2D.
    pub fn view_dimension(&self) -> Result<TextureViewDimension> {
        let Self {
            width,
            height,
            depth,
            layer_count,
            face_count,
        } = *self;

        let view = if face_count == 6 && depth == 0 && layer_count == 0 {
            TextureViewDimension::Cube
        } else if face_count == 6 && depth == 0 && layer_count > 0 {
            TextureViewDimension::CubeArray
        } else if layer_count > 0 && depth == 0 {
            TextureViewDimension::D2Array
        } else if depth > 0 {
            TextureViewDimension::D3
        } else if height > 0 {
            TextureViewDimension::D2
        } else if width > 0 && height == 0 && depth == 0 && layer_count == 0 {
            TextureViewDimension::D1
        } else {
            return Err(self.invalid());
        };
        Ok(view)
    }

    /// `max(1, depth) * max(1, faces) * max(1, layers)`.
    ///
    /// Fails with [`Error::InvalidShape`] when the product does not fit in
    /// a `u32`.
    #[inline]
    pub fn depth_or_array_layers(&self) -> Result<u32> {
        self.slice_count(0)
    }

    /// Base (mip 0) extent as needed for texture creation.
    pub fn base_extent(&self) -> Result<Extent3d> {
        Ok(Extent3d::new(
            self.width.max(1),
            self.height.max(1),
            self.depth_or_array_layers()?,
        ))
    }

    /// Pixel extent of one mip level: `max(1, base >> mip)` on every axis.
    pub fn mip_extent(&self, mip: u32) -> Extent3d {
        Extent3d::new(
            mip_size(self.width, mip),
            mip_size(self.height, mip),
            mip_size(self.depth, mip),
        )
    }

    /// Number of 2D slices a mip level occupies.
    ///
    /// Depth halves with every mip; faces and layers never do.
    pub fn slice_count(&self, mip: u32) -> Result<u32> {
        self.face_count
            .max(1)
            .checked_mul(self.layer_count.max(1))
            .and_then(|array| array.checked_mul(mip_size(self.depth, mip)))
            .ok_or_else(|| self.invalid())
    }

    fn invalid(&self) -> Error {
        Error::InvalidShape {
            width: self.width,
            height: self.height,
            depth: self.depth,
            layer_count: self.layer_count,
            face_count: self.face_count,
        }
    }
}

/// Size of one axis at a mip level, never below one texel.
#[inline]
pub fn mip_size(base: u32, mip: u32) -> u32 {
    base.checked_shr(mip).unwrap_or(0).max(1)
}
