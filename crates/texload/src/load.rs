//! Pick a decoder from the leading bytes.

use std::path::Path;

use texload_format::TextureSource;
use texload_image::StandardImage;
use texload_ktx2::Ktx2Texture;
use tracing::debug;

use crate::Result;

/// A decoded texture of either kind.
pub type DynTextureSource = Box<dyn TextureSource + Send + Sync>;

/// Decode `data` as KTX2 when it carries the KTX2 identifier, otherwise as
/// a plain image.
pub fn load(data: Vec<u8>) -> Result<DynTextureSource> {
    if Ktx2Texture::is_ktx2(&data) {
        debug!(len = data.len(), "loading KTX2 container");
        Ok(Box::new(Ktx2Texture::from_vec(data)?))
    } else {
        debug!(len = data.len(), "loading plain image");
        Ok(Box::new(StandardImage::decode(&data)?))
    }
}

/// Read a file and [`load`] it.
pub fn open<P: AsRef<Path>>(path: P) -> Result<DynTextureSource> {
    load(std::fs::read(path)?)
}
