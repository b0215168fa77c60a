//! RGBA8 images decoded by the `image` crate.

use std::borrow::Cow;
use std::path::Path;

use image::DynamicImage;
use texload_format::{
    check_mip, format_layout_info, Error as TextureError, Extent3d, LevelLayout, ShapeCounts,
    TextureDimension, TextureFormat, TextureSource,
};
use tracing::debug;

use crate::{Error, Result};

/// A plain image converted to RGBA8.
#[derive(Debug, Clone)]
pub struct StandardImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl StandardImage {
    const FORMAT: TextureFormat = TextureFormat::Rgba8Unorm;

    /// Convert a decoded image, whatever its pixel type, to RGBA8.
    pub fn from_image(image: DynamicImage) -> Result<Self> {
        let rgba = image.into_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba8(width, height, rgba.into_raw())
    }

    /// Wrap tightly packed RGBA8 pixels.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::Empty { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Decode an encoded image held in memory.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)?;
        debug!(width = image.width(), height = image.height(), "decoded image");
        Self::from_image(image)
    }

    /// Read and decode an image file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_image(image::open(path)?)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Give the pixel buffer back.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl TextureSource for StandardImage {
    fn format(&self) -> TextureFormat {
        Self::FORMAT
    }

    fn dimension(&self) -> TextureDimension {
        TextureDimension::D2
    }

    fn level_count(&self) -> u32 {
        1
    }

    fn extent(&self) -> Extent3d {
        Extent3d::new(self.width, self.height, 1)
    }

    fn level_data(&self, mip: u32) -> texload_format::Result<Cow<'_, [u8]>> {
        check_mip(mip, 1)?;
        Ok(Cow::Borrowed(&self.data))
    }

    fn level_layout(&self, mip: u32) -> texload_format::Result<LevelLayout> {
        check_mip(mip, 1)?;
        let info = format_layout_info(Self::FORMAT)
            .ok_or(TextureError::FormatNotCopyable(Self::FORMAT))?;
        LevelLayout::compute(info, &ShapeCounts::image_2d(self.width, self.height), 0)
    }
}
