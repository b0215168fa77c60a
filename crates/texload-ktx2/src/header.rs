//! KTX2 header structures.

use std::ops::Range;

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use texload_format::ShapeCounts;

/// KTX2 file identifier.
pub const KTX2_MAGIC: [u8; 12] = [
    0xAB, 0x4B, 0x54, 0x58, 0x20, 0x32, 0x30, 0xBB, 0x0D, 0x0A, 0x1A, 0x0A,
];

/// On-disk KTX2 header, identifier included.
///
/// Integers are stored little-endian; use [`Ktx2Header::from_raw`] to get
/// host values.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct RawHeader {
    pub identifier: [u8; 12],
    pub vk_format: u32,
    pub type_size: u32,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub pixel_depth: u32,
    pub layer_count: u32,
    pub face_count: u32,
    pub level_count: u32,
    pub supercompression_scheme: u32,
    pub dfd_byte_offset: u32,
    pub dfd_byte_length: u32,
    pub kvd_byte_offset: u32,
    pub kvd_byte_length: u32,
    pub sgd_byte_offset: u64,
    pub sgd_byte_length: u64,
}

impl RawHeader {
    /// Header size in bytes, identifier included.
    pub const SIZE: usize = 80;
}

/// On-disk level index entry.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct RawLevelIndex {
    pub byte_offset: u64,
    pub byte_length: u64,
    pub uncompressed_byte_length: u64,
}

impl RawLevelIndex {
    /// Entry size in bytes.
    pub const SIZE: usize = 24;
}

/// Supercompression applied over level payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupercompressionScheme {
    /// Levels are stored as-is.
    None = 0,
    /// Basis Universal ETC1S.
    BasisLZ = 1,
    /// Zstandard.
    ZStandard = 2,
    /// zlib.
    ZLib = 3,
}

impl SupercompressionScheme {
    /// Map a header value to a scheme, `None` for unknown values.
    pub const fn from_raw(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::BasisLZ),
            2 => Some(Self::ZStandard),
            3 => Some(Self::ZLib),
            _ => None,
        }
    }

    /// Raw header value.
    #[inline]
    pub const fn as_raw(self) -> u32 {
        self as u32
    }
}

/// Parsed KTX2 header with host-endian values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ktx2Header {
    pub vk_format: u32,
    pub type_size: u32,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub pixel_depth: u32,
    pub layer_count: u32,
    pub face_count: u32,
    /// Level count as stored; `0` asks the loader to generate mips.
    pub level_count: u32,
    pub supercompression_scheme: SupercompressionScheme,
    pub dfd_byte_offset: u32,
    pub dfd_byte_length: u32,
    pub kvd_byte_offset: u32,
    pub kvd_byte_length: u32,
    pub sgd_byte_offset: u64,
    pub sgd_byte_length: u64,
}

impl Ktx2Header {
    /// Convert an on-disk header. Fails with the raw value when the
    /// supercompression scheme is unknown.
    pub fn from_raw(raw: &RawHeader) -> std::result::Result<Self, u32> {
        let scheme = u32::from_le(raw.supercompression_scheme);
        let supercompression_scheme = SupercompressionScheme::from_raw(scheme).ok_or(scheme)?;

        Ok(Self {
            vk_format: u32::from_le(raw.vk_format),
            type_size: u32::from_le(raw.type_size),
            pixel_width: u32::from_le(raw.pixel_width),
            pixel_height: u32::from_le(raw.pixel_height),
            pixel_depth: u32::from_le(raw.pixel_depth),
            layer_count: u32::from_le(raw.layer_count),
            face_count: u32::from_le(raw.face_count),
            level_count: u32::from_le(raw.level_count),
            supercompression_scheme,
            dfd_byte_offset: u32::from_le(raw.dfd_byte_offset),
            dfd_byte_length: u32::from_le(raw.dfd_byte_length),
            kvd_byte_offset: u32::from_le(raw.kvd_byte_offset),
            kvd_byte_length: u32::from_le(raw.kvd_byte_length),
            sgd_byte_offset: u64::from_le(raw.sgd_byte_offset),
            sgd_byte_length: u64::from_le(raw.sgd_byte_length),
        })
    }

    /// Number of levels actually stored: `max(1, level_count)`.
    #[inline]
    pub fn stored_level_count(&self) -> u32 {
        self.level_count.max(1)
    }

    /// Dimension counts used for shape classification.
    pub fn shape(&self) -> ShapeCounts {
        ShapeCounts {
            width: self.pixel_width,
            height: self.pixel_height,
            depth: self.pixel_depth,
            layer_count: self.layer_count,
            face_count: self.face_count,
        }
    }
}

/// Location of one mip level's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelIndex {
    pub byte_offset: u64,
    pub byte_length: u64,
    pub uncompressed_byte_length: u64,
}

impl LevelIndex {
    /// Byte range inside a buffer of `len` bytes, `None` if it does not fit.
    pub fn range_in(&self, len: usize) -> Option<Range<usize>> {
        let start = usize::try_from(self.byte_offset).ok()?;
        let end = start.checked_add(usize::try_from(self.byte_length).ok()?)?;
        (end <= len).then_some(start..end)
    }
}

impl From<RawLevelIndex> for LevelIndex {
    fn from(raw: RawLevelIndex) -> Self {
        Self {
            byte_offset: u64::from_le(raw.byte_offset),
            byte_length: u64::from_le(raw.byte_length),
            uncompressed_byte_length: u64::from_le(raw.uncompressed_byte_length),
        }
    }
}
