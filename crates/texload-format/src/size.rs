//! Per-mip upload layout math.

use crate::{
    format_layout_info, Error, Extent3d, FormatLayoutInfo, Result, ShapeCounts, TextureDataLayout,
    TextureFormat,
};

/// Number of blocks needed to cover `texels`, rounding up.
#[inline]
pub fn block_count(texels: u32, block: u32) -> u32 {
    texels.div_ceil(block)
}

/// Upload layout of one mip level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelLayout {
    /// Mip level this layout describes.
    pub mip: u32,
    /// Buffer layout (`bytes_per_row`, `rows_per_image`).
    pub layout: TextureDataLayout,
    /// Copy extent, rounded up to whole blocks.
    pub extent: Extent3d,
}

impl LevelLayout {
    /// Compute the layout of `mip` for a texture of the given shape.
    ///
    /// Block compression is strictly 2D: each slice is one block deep. The
    /// rounded extent may exceed the true mip size at the edges.
    ///
    /// Fails with [`Error::LayoutOverflow`] when the row pitch or the padded
    /// extent does not fit in a `u32`, or the level's byte size does not fit
    /// in a `u64`.
    pub fn compute(info: FormatLayoutInfo, shape: &ShapeCounts, mip: u32) -> Result<Self> {
        let (block_width, block_height) = info.block_extent;
        let texels = shape.mip_extent(mip);
        let slices = shape.slice_count(mip)?;

        let block_cols = block_count(texels.width, block_width);
        let block_rows = block_count(texels.height, block_height);
        let overflow = || Error::LayoutOverflow { mip };

        let level = Self {
            mip,
            layout: TextureDataLayout {
                offset: 0,
                bytes_per_row: block_cols
                    .checked_mul(info.block_footprint)
                    .ok_or_else(overflow)?,
                rows_per_image: block_rows,
            },
            extent: Extent3d::new(
                block_cols.checked_mul(block_width).ok_or_else(overflow)?,
                block_rows.checked_mul(block_height).ok_or_else(overflow)?,
                slices,
            ),
        };
        level.byte_size().ok_or_else(overflow)?;
        Ok(level)
    }

    /// Bytes this level occupies in a tightly packed buffer, or `None` if
    /// that does not fit in a `u64`.
    #[inline]
    pub fn byte_size(&self) -> Option<u64> {
        u64::from(self.layout.bytes_per_row)
            .checked_mul(u64::from(self.layout.rows_per_image))?
            .checked_mul(u64::from(self.extent.depth_or_array_layers))
    }
}

/// Buffer layout for copying an exact, block-aligned region of `format`.
///
/// Unlike [`LevelLayout::compute`] nothing is rounded: an extent that is not a
/// whole number of blocks is rejected.
pub fn infer_layout(format: TextureFormat, extent: Extent3d) -> Result<TextureDataLayout> {
    let info = format_layout_info(format).ok_or(Error::FormatNotCopyable(format))?;
    let (block_width, block_height) = info.block_extent;

    if extent.width % block_width != 0 || extent.height % block_height != 0 {
        return Err(Error::UnalignedExtent {
            width: extent.width,
            height: extent.height,
            block_width,
            block_height,
        });
    }

    Ok(TextureDataLayout {
        offset: 0,
        bytes_per_row: extent.width / block_width * info.block_footprint,
        rows_per_image: extent.height / block_height,
    })
}
