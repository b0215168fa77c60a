//! The contract every decoded texture implements.

use std::borrow::Cow;

use crate::{Error, Extent3d, LevelLayout, Result, TextureDimension, TextureFormat};

/// A decoded, uploadable texture.
///
/// Implementors own their backing bytes and are immutable once constructed.
/// For every mip in `0..level_count()` the bytes returned by
/// [`level_data`](Self::level_data) cover exactly
/// `bytes_per_row * rows_per_image * depth_or_array_layers` of the matching
/// [`level_layout`](Self::level_layout). Mip 0 is always the base level.
pub trait TextureSource {
    /// Pixel format of every level.
    fn format(&self) -> TextureFormat;

    /// Storage dimension.
    fn dimension(&self) -> TextureDimension;

    /// Number of mip levels, at least one.
    fn level_count(&self) -> u32;

    /// Size of mip 0.
    fn extent(&self) -> Extent3d;

    /// Raw, decompressed bytes of one mip level.
    fn level_data(&self, mip: u32) -> Result<Cow<'_, [u8]>>;

    /// Upload layout of one mip level.
    fn level_layout(&self, mip: u32) -> Result<LevelLayout>;
}

/// Fail with [`Error::IndexOutOfRange`] unless `mip < level_count`.
#[inline]
pub fn check_mip(mip: u32, level_count: u32) -> Result<()> {
    if mip < level_count {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { mip, level_count })
    }
}

impl<T: TextureSource + ?Sized> TextureSource for Box<T> {
    fn format(&self) -> TextureFormat {
        (**self).format()
    }

    fn dimension(&self) -> TextureDimension {
        (**self).dimension()
    }

    fn level_count(&self) -> u32 {
        (**self).level_count()
    }

    fn extent(&self) -> Extent3d {
        (**self).extent()
    }

    fn level_data(&self, mip: u32) -> Result<Cow<'_, [u8]>> {
        (**self).level_data(mip)
    }

    fn level_layout(&self, mip: u32) -> Result<LevelLayout> {
        (**self).level_layout(mip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_mip() {
        assert!(check_mip(0, 1).is_ok());
        assert!(check_mip(2, 3).is_ok());
        assert_eq!(
            check_mip(3, 3),
            Err(Error::IndexOutOfRange {
                mip: 3,
                level_count: 3
            })
        );
    }
}
