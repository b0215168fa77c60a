//! Decoded KTX2 textures.

use std::borrow::Cow;
use std::fs;
use std::ops::Range;
use std::path::Path;

use texload_common::BinaryReader;
use texload_format::{
    check_mip, Extent3d, FormatLayoutInfo, LevelLayout, ShapeCounts, TextureDimension,
    TextureFormat, TextureSource, TextureViewDimension,
};
use tracing::debug;

use crate::header::{
    Ktx2Header, LevelIndex, RawHeader, RawLevelIndex, SupercompressionScheme, KTX2_MAGIC,
};
use crate::vk_format::texture_format_from_vk;
use crate::{Error, Result};

/// A decoded KTX2 container.
///
/// Owns the container bytes; each level is a read-only view into them. The
/// level index is stored base level first, so `level(0)` is always the
/// largest mip.
#[derive(Debug, Clone)]
pub struct Ktx2Texture {
    data: Vec<u8>,
    header: Ktx2Header,
    format: TextureFormat,
    layout_info: FormatLayoutInfo,
    view_dimension: TextureViewDimension,
    extent: Extent3d,
    levels: Vec<LevelIndex>,
    ranges: Vec<Range<usize>>,
}

impl Ktx2Texture {
    /// Check whether data starts with the KTX2 identifier.
    pub fn is_ktx2(data: &[u8]) -> bool {
        data.starts_with(&KTX2_MAGIC)
    }

    /// Read and decode a KTX2 file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_vec(fs::read(path)?)
    }

    /// Decode a KTX2 container from borrowed bytes, copying them.
    pub fn parse(data: &[u8]) -> Result<Self> {
        Self::from_vec(data.to_vec())
    }

    /// Decode a KTX2 container, taking ownership of the bytes.
    ///
    /// Validation order: identifier, fixed header, format code, copy layout,
    /// supercompression, shape, level index, level ranges. The first failing
    /// step aborts the decode.
    pub fn from_vec(data: Vec<u8>) -> Result<Self> {
        match data.get(..KTX2_MAGIC.len()) {
            Some(identifier) if identifier == &KTX2_MAGIC[..] => {}
            other => {
                return Err(Error::InvalidMagic {
                    actual: other.unwrap_or(&data[..]).to_vec(),
                })
            }
        }

        let mut reader = BinaryReader::new(&data);
        let raw: RawHeader = reader.read_struct()?;
        let header = Ktx2Header::from_raw(&raw)
            .map_err(texload_format::Error::UnsupportedCompression)?;

        let format = texture_format_from_vk(header.vk_format)
            .ok_or(Error::UnsupportedFormat(header.vk_format))?;
        let layout_info = format
            .layout_info()
            .ok_or(texload_format::Error::FormatNotCopyable(format))?;

        if header.supercompression_scheme != SupercompressionScheme::None {
            return Err(texload_format::Error::UnsupportedCompression(
                header.supercompression_scheme.as_raw(),
            )
            .into());
        }

        let shape = header.shape();
        let view_dimension = shape.view_dimension()?;
        let extent = shape.base_extent()?;

        // The header count is untrusted; only entries that fit in the
        // remaining bytes are reserved up front.
        let level_count = header.stored_level_count();
        let capacity = (level_count as usize).min(reader.remaining() / RawLevelIndex::SIZE);
        let mut levels = Vec::with_capacity(capacity);
        for _ in 0..level_count {
            let raw: RawLevelIndex = reader.read_struct()?;
            levels.push(LevelIndex::from(raw));
        }

        let levels = base_level_first(levels, layout_info, &shape)?;
        let ranges = levels
            .iter()
            .map(|level| {
                level.range_in(data.len()).ok_or(Error::TruncatedData {
                    offset: level.byte_offset,
                    length: level.byte_length,
                    available: data.len(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            ?format,
            width = header.pixel_width,
            height = header.pixel_height,
            depth_or_array_layers = extent.depth_or_array_layers,
            levels = level_count,
            ?view_dimension,
            "decoded KTX2 container"
        );

        Ok(Self {
            data,
            header,
            format,
            layout_info,
            view_dimension,
            extent,
            levels,
            ranges,
        })
    }

    /// Parsed header.
    pub fn header(&self) -> &Ktx2Header {
        &self.header
    }

    /// Level index, base level first.
    pub fn levels(&self) -> &[LevelIndex] {
        &self.levels
    }

    /// Index entry of one mip level.
    pub fn level(&self, mip: u32) -> Result<&LevelIndex> {
        check_mip(mip, self.level_count())?;
        Ok(&self.levels[mip as usize])
    }

    /// View dimension for sampling.
    pub fn view_dimension(&self) -> TextureViewDimension {
        self.view_dimension
    }

    /// Texel block layout of the format.
    pub fn layout_info(&self) -> FormatLayoutInfo {
        self.layout_info
    }

    /// Dimension counts from the header.
    pub fn shape(&self) -> ShapeCounts {
        self.header.shape()
    }

    /// The whole container.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Give the container bytes back, e.g. to reuse the allocation.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl TextureSource for Ktx2Texture {
    fn format(&self) -> TextureFormat {
        self.format
    }

    fn dimension(&self) -> TextureDimension {
        self.header.shape().dimension()
    }

    fn level_count(&self) -> u32 {
        self.levels.len() as u32
    }

    fn extent(&self) -> Extent3d {
        self.extent
    }

    fn level_data(&self, mip: u32) -> texload_format::Result<Cow<'_, [u8]>> {
        check_mip(mip, self.level_count())?;
        match self.header.supercompression_scheme {
            SupercompressionScheme::None => {}
            scheme => return Err(texload_format::Error::UnsupportedCompression(scheme.as_raw())),
        }

        let range = self.ranges[mip as usize].clone();
        Ok(Cow::Borrowed(&self.data[range]))
    }

    fn level_layout(&self, mip: u32) -> texload_format::Result<LevelLayout> {
        check_mip(mip, self.level_count())?;
        LevelLayout::compute(self.layout_info, &self.header.shape(), mip)
    }
}

/// Decode a KTX2 container.
pub fn decode_container(data: Vec<u8>) -> Result<Ktx2Texture> {
    Ktx2Texture::from_vec(data)
}

/// Normalize the level index so that slot 0 is the base level.
///
/// The index is treated as stored smallest mip first and reversed. It is
/// kept as read only when its lengths already line up base-first with the
/// computed level sizes and the reversed order does not.
fn base_level_first(
    mut levels: Vec<LevelIndex>,
    info: FormatLayoutInfo,
    shape: &ShapeCounts,
) -> Result<Vec<LevelIndex>> {
    let expected = (0..levels.len() as u32)
        .map(|mip| {
            LevelLayout::compute(info, shape, mip)?
                .byte_size()
                .ok_or(texload_format::Error::LayoutOverflow { mip })
        })
        .collect::<texload_format::Result<Vec<u64>>>()?;
    let as_read = sizes_match(levels.iter(), &expected);
    let reversed = sizes_match(levels.iter().rev(), &expected);
    if !(as_read && !reversed) {
        levels.reverse();
    }
    Ok(levels)
}

fn sizes_match<'a>(levels: impl Iterator<Item = &'a LevelIndex>, expected: &[u64]) -> bool {
    levels
        .zip(expected)
        .all(|(level, &size)| level.byte_length == size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{IndexOrder, Ktx2Builder};
    use byteorder::{LittleEndian, WriteBytesExt};
    use proptest::prelude::*;

    const VK_R8G8B8A8_UNORM: u32 = 37;
    const VK_X8_D24_UNORM_PACK32: u32 = 125;
    const VK_BC1_RGBA_UNORM_BLOCK: u32 = 133;
    const VK_BC7_UNORM_BLOCK: u32 = 145;

    #[test]
    fn test_rgba8_single_level() {
        let data = Ktx2Builder::new(VK_R8G8B8A8_UNORM, 256, 256)
            .level(256 * 256 * 4, 0x7F)
            .build();
        let texture = Ktx2Texture::from_vec(data).unwrap();

        assert_eq!(texture.format(), TextureFormat::Rgba8Unorm);
        assert_eq!(texture.dimension(), TextureDimension::D2);
        assert_eq!(texture.view_dimension(), TextureViewDimension::D2);
        assert_eq!(texture.level_count(), 1);
        assert_eq!(texture.extent(), Extent3d::new(256, 256, 1));

        let layout = texture.level_layout(0).unwrap();
        assert_eq!(layout.layout.bytes_per_row, 1024);
        assert_eq!(layout.layout.rows_per_image, 256);
        assert_eq!(layout.extent, Extent3d::new(256, 256, 1));
        assert_eq!(texture.level_data(0).unwrap().len(), 256 * 256 * 4);
    }

    #[test]
    fn test_bc1_layout() {
        let data = Ktx2Builder::new(VK_BC1_RGBA_UNORM_BLOCK, 256, 256)
            .level(64 * 64 * 8, 0)
            .build();
        let texture = Ktx2Texture::parse(&data).unwrap();

        let layout = texture.level_layout(0).unwrap();
        assert_eq!(layout.layout.bytes_per_row, 512);
        assert_eq!(layout.layout.rows_per_image, 64);
        assert_eq!(texture.layout_info().block_extent, (4, 4));
    }

    #[test]
    fn test_levels_are_base_first() {
        // 8x8 RGBA8: 256, 64 and 16 bytes; the index is stored smallest first
        let data = Ktx2Builder::new(VK_R8G8B8A8_UNORM, 8, 8)
            .level(256, 0)
            .level(64, 1)
            .level(16, 2)
            .build();
        let texture = Ktx2Texture::from_vec(data).unwrap();

        assert_eq!(texture.level_count(), 3);
        for mip in 0..3u32 {
            let bytes = texture.level_data(mip).unwrap();
            assert!(bytes.iter().all(|&b| b == mip as u8), "mip {mip}");
            assert_eq!(bytes.len() as u64, texture.level_layout(mip).unwrap().byte_size().unwrap());
        }
        assert_eq!(texture.level(0).unwrap().byte_length, 256);
    }

    #[test]
    fn test_base_first_index_is_kept() {
        let data = Ktx2Builder {
            index_order: IndexOrder::BaseFirst,
            ..Ktx2Builder::new(VK_R8G8B8A8_UNORM, 8, 8)
                .level(256, 0)
                .level(64, 1)
                .level(16, 2)
        }
        .build();
        let texture = Ktx2Texture::from_vec(data).unwrap();

        assert_eq!(texture.level(0).unwrap().byte_length, 256);
        assert!(texture.level_data(2).unwrap().iter().all(|&b| b == 2));
    }

    #[test]
    fn test_ambiguous_index_is_reversed() {
        // Every BC7 mip of a 4x4 texture is one 16-byte block, so sizes
        // cannot tell the two orders apart.
        let data = Ktx2Builder::new(VK_BC7_UNORM_BLOCK, 4, 4)
            .level(16, 0)
            .level(16, 1)
            .level(16, 2)
            .build();
        let texture = Ktx2Texture::from_vec(data).unwrap();

        assert!(texture.level_data(0).unwrap().iter().all(|&b| b == 0));
        assert!(texture.level_data(2).unwrap().iter().all(|&b| b == 2));
    }

    #[test]
    fn test_invalid_magic() {
        let mut data = Ktx2Builder::new(VK_R8G8B8A8_UNORM, 4, 4).level(64, 0).build();
        data[1] = b'X';
        assert!(matches!(
            Ktx2Texture::from_vec(data),
            Err(Error::InvalidMagic { .. })
        ));

        assert!(matches!(
            Ktx2Texture::parse(b"DDS "),
            Err(Error::InvalidMagic { .. })
        ));
        assert!(matches!(
            Ktx2Texture::parse(&[]),
            Err(Error::InvalidMagic { .. })
        ));
    }

    #[test]
    fn test_truncated_header() {
        let data = Ktx2Builder::new(VK_R8G8B8A8_UNORM, 4, 4).level(64, 0).build();
        assert!(matches!(
            Ktx2Texture::parse(&data[..40]),
            Err(Error::TruncatedData { offset: 0, length: 80, .. })
        ));
    }

    #[test]
    fn test_truncated_level_index() {
        let data = Ktx2Builder::new(VK_R8G8B8A8_UNORM, 4, 4)
            .level(64, 0)
            .level(16, 1)
            .build();
        assert!(matches!(
            Ktx2Texture::parse(&data[..RawHeader::SIZE + 30]),
            Err(Error::TruncatedData {
                offset: 104,
                length: 24,
                available: 110
            })
        ));
    }

    #[test]
    fn test_truncated_level() {
        let data = Ktx2Builder::new(VK_R8G8B8A8_UNORM, 4, 4).level(64, 0).build();
        let short = &data[..data.len() - 1];
        assert!(matches!(
            Ktx2Texture::parse(short),
            Err(Error::TruncatedData { length: 64, .. })
        ));
    }

    #[test]
    fn test_unsupported_format() {
        let data = Ktx2Builder::new(23, 4, 4).level(48, 0).build();
        assert!(matches!(
            Ktx2Texture::from_vec(data),
            Err(Error::UnsupportedFormat(23))
        ));
    }

    #[test]
    fn test_format_not_copyable() {
        let data = Ktx2Builder::new(VK_X8_D24_UNORM_PACK32, 4, 4).level(64, 0).build();
        assert!(matches!(
            Ktx2Texture::from_vec(data),
            Err(Error::Texture(texload_format::Error::FormatNotCopyable(
                TextureFormat::Depth24Plus
            )))
        ));
    }

    #[test]
    fn test_zstd_fails_before_levels_are_read() {
        let mut builder = Ktx2Builder::new(VK_R8G8B8A8_UNORM, 256, 256);
        builder.supercompression_scheme = 2;
        // No level index and no payload at all: the scheme check comes first.
        let data = builder.build();
        assert_eq!(data.len(), RawHeader::SIZE);

        assert!(matches!(
            Ktx2Texture::from_vec(data),
            Err(Error::Texture(texload_format::Error::UnsupportedCompression(2)))
        ));
    }

    #[test]
    fn test_unknown_scheme_value() {
        let mut builder = Ktx2Builder::new(VK_R8G8B8A8_UNORM, 4, 4).level(64, 0);
        builder.supercompression_scheme = 42;
        assert!(matches!(
            Ktx2Texture::from_vec(builder.build()),
            Err(Error::Texture(texload_format::Error::UnsupportedCompression(42)))
        ));
    }

    #[test]
    fn test_invalid_shape() {
        let mut builder = Ktx2Builder::new(VK_R8G8B8A8_UNORM, 0, 0).level(4, 0);
        builder.face_count = 1;
        assert!(matches!(
            Ktx2Texture::from_vec(builder.build()),
            Err(Error::Texture(texload_format::Error::InvalidShape { .. }))
        ));
    }

    #[test]
    fn test_zero_level_count_reads_one_level() {
        let mut builder = Ktx2Builder::new(VK_R8G8B8A8_UNORM, 4, 4).level(64, 9);
        builder.level_count = Some(0);
        let texture = Ktx2Texture::from_vec(builder.build()).unwrap();

        assert_eq!(texture.header().level_count, 0);
        assert_eq!(texture.level_count(), 1);
        assert!(texture.level_data(0).unwrap().iter().all(|&b| b == 9));
    }

    #[test]
    fn test_huge_level_count_is_truncated() {
        let mut builder = Ktx2Builder::new(VK_R8G8B8A8_UNORM, 4, 4).level(64, 0);
        builder.level_count = Some(u32::MAX);
        let data = builder.build();
        let len = data.len();

        // One real entry, then the index runs into the 64 payload bytes and
        // fails on the fourth entry read.
        assert!(matches!(
            Ktx2Texture::from_vec(data),
            Err(Error::TruncatedData { length: 24, available, .. }) if available == len
        ));
    }

    #[test]
    fn test_huge_width_is_rejected() {
        let data = Ktx2Builder::new(VK_R8G8B8A8_UNORM, 1 << 30, 1)
            .level(16, 0)
            .build();
        assert!(matches!(
            Ktx2Texture::from_vec(data),
            Err(Error::Texture(texload_format::Error::LayoutOverflow { mip: 0 }))
        ));
    }

    #[test]
    fn test_huge_face_and_layer_counts() {
        let mut builder = Ktx2Builder::new(VK_R8G8B8A8_UNORM, 4, 4).level(64, 0);
        builder.face_count = 6;
        builder.layer_count = u32::MAX;
        assert!(matches!(
            Ktx2Texture::from_vec(builder.build()),
            Err(Error::Texture(texload_format::Error::InvalidShape {
                layer_count: u32::MAX,
                face_count: 6,
                ..
            }))
        ));
    }

    #[test]
    fn test_level_past_end_of_address_space() {
        let mut data = Ktx2Builder::new(VK_R8G8B8A8_UNORM, 4, 4).level(64, 0).build();
        let entry = RawHeader::SIZE;
        data[entry..entry + 8].copy_from_slice(&(u64::MAX - 8).to_le_bytes());
        assert!(matches!(
            Ktx2Texture::from_vec(data),
            Err(Error::TruncatedData { offset, length: 64, .. }) if offset == u64::MAX - 8
        ));
    }

    #[test]
    fn test_mip_out_of_range() {
        let data = Ktx2Builder::new(VK_R8G8B8A8_UNORM, 4, 4).level(64, 0).build();
        let texture = Ktx2Texture::from_vec(data).unwrap();

        assert_eq!(
            texture.level_data(1).unwrap_err(),
            texload_format::Error::IndexOutOfRange {
                mip: 1,
                level_count: 1
            }
        );
        assert!(texture.level_layout(5).is_err());
        assert!(texture.level(1).is_err());
    }

    #[test]
    fn test_cube_map() {
        let mut builder = Ktx2Builder::new(VK_R8G8B8A8_UNORM, 4, 4).level(4 * 4 * 4 * 6, 0);
        builder.face_count = 6;
        let texture = Ktx2Texture::from_vec(builder.build()).unwrap();

        assert_eq!(texture.view_dimension(), TextureViewDimension::Cube);
        assert_eq!(texture.extent(), Extent3d::new(4, 4, 6));
        assert_eq!(texture.level_layout(0).unwrap().extent.depth_or_array_layers, 6);
    }

    #[test]
    fn test_into_data_returns_the_buffer() {
        let data = Ktx2Builder::new(VK_R8G8B8A8_UNORM, 4, 4).level(64, 0).build();
        let len = data.len();
        let texture = decode_container(data).unwrap();
        assert!(Ktx2Texture::is_ktx2(texture.data()));
        assert_eq!(texture.into_data().len(), len);
    }

    /// Header fields and level entries with no relation to each other or
    /// to the bytes that follow.
    fn hostile_container(
        fields: [u32; 13],
        entries: Vec<(u64, u64)>,
        tail: Vec<u8>,
    ) -> Vec<u8> {
        let mut out = KTX2_MAGIC.to_vec();
        for value in fields {
            out.write_u32::<LittleEndian>(value).unwrap();
        }
        out.write_u64::<LittleEndian>(0).unwrap();
        out.write_u64::<LittleEndian>(0).unwrap();
        for (offset, length) in entries {
            out.write_u64::<LittleEndian>(offset).unwrap();
            out.write_u64::<LittleEndian>(length).unwrap();
            out.write_u64::<LittleEndian>(length).unwrap();
        }
        out.extend_from_slice(&tail);
        out
    }

    fn header_value() -> impl Strategy<Value = u32> {
        prop_oneof![
            0u32..8,
            Just(6),
            Just(1 << 30),
            Just(u32::MAX - 1),
            Just(u32::MAX),
            any::<u32>(),
        ]
    }

    fn vk_format() -> impl Strategy<Value = u32> {
        prop_oneof![
            Just(VK_R8G8B8A8_UNORM),
            Just(VK_BC1_RGBA_UNORM_BLOCK),
            Just(VK_BC7_UNORM_BLOCK),
            Just(109u32),
            any::<u32>(),
        ]
    }

    fn entry_value() -> impl Strategy<Value = u64> {
        prop_oneof![0u64..512, Just(u64::MAX), (u64::MAX - 64)..=u64::MAX, any::<u64>()]
    }

    proptest! {
        #[test]
        fn prop_arbitrary_header_never_panics(
            vk in vk_format(),
            dims in proptest::array::uniform5(header_value()),
            level_count in header_value(),
            scheme in prop_oneof![Just(0u32), any::<u32>()],
            entries in proptest::collection::vec((entry_value(), entry_value()), 0..6),
            tail in proptest::collection::vec(any::<u8>(), 0..256),
        ) {
            let [width, height, depth, layer_count, face_count] = dims;
            let fields = [
                vk, 1, width, height, depth, layer_count, face_count, level_count, scheme,
                0, 0, 0, 0,
            ];
            let data = hostile_container(fields, entries, tail);

            if let Ok(texture) = Ktx2Texture::from_vec(data) {
                let len = texture.data().len();
                for mip in 0..texture.level_count() {
                    prop_assert!(texture.level_data(mip).unwrap().len() <= len);
                    let _ = texture.level_layout(mip);
                }
                let _ = texture.extent();
            }
        }
    }
}
