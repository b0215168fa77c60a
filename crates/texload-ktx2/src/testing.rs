//! Synthetic KTX2 containers for tests.

use byteorder::{LittleEndian, WriteBytesExt};

use crate::header::{RawHeader, RawLevelIndex, KTX2_MAGIC};

/// Order in which level index entries are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IndexOrder {
    SmallestFirst,
    BaseFirst,
}

#[derive(Debug, Clone)]
pub(crate) struct Ktx2Builder {
    pub vk_format: u32,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub layer_count: u32,
    pub face_count: u32,
    /// Overrides the stored level count (e.g. `0`).
    pub level_count: Option<u32>,
    pub supercompression_scheme: u32,
    /// Level payloads, base level first.
    pub levels: Vec<Vec<u8>>,
    pub index_order: IndexOrder,
}

impl Ktx2Builder {
    pub fn new(vk_format: u32, width: u32, height: u32) -> Self {
        Self {
            vk_format,
            width,
            height,
            depth: 0,
            layer_count: 0,
            face_count: 1,
            level_count: None,
            supercompression_scheme: 0,
            levels: Vec::new(),
            index_order: IndexOrder::SmallestFirst,
        }
    }

    /// Add a level filled with `fill`.
    pub fn level(mut self, len: usize, fill: u8) -> Self {
        self.levels.push(vec![fill; len]);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let level_count = self.level_count.unwrap_or(self.levels.len() as u32);
        let data_start = RawHeader::SIZE + self.levels.len() * RawLevelIndex::SIZE;

        // Payloads are laid out smallest mip first, as KTX2 writers do.
        let mut offsets = vec![0u64; self.levels.len()];
        let mut payload = Vec::new();
        for (mip, level) in self.levels.iter().enumerate().rev() {
            offsets[mip] = (data_start + payload.len()) as u64;
            payload.extend_from_slice(level);
        }

        let mut out = Vec::with_capacity(data_start + payload.len());
        out.extend_from_slice(&KTX2_MAGIC);
        for value in [
            self.vk_format,
            1,
            self.width,
            self.height,
            self.depth,
            self.layer_count,
            self.face_count,
            level_count,
            self.supercompression_scheme,
            0,
            0,
            0,
            0,
        ] {
            out.write_u32::<LittleEndian>(value).unwrap();
        }
        out.write_u64::<LittleEndian>(0).unwrap();
        out.write_u64::<LittleEndian>(0).unwrap();

        let mut entries: Vec<usize> = (0..self.levels.len()).collect();
        if self.index_order == IndexOrder::SmallestFirst {
            entries.reverse();
        }
        for mip in entries {
            let len = self.levels[mip].len() as u64;
            out.write_u64::<LittleEndian>(offsets[mip]).unwrap();
            out.write_u64::<LittleEndian>(len).unwrap();
            out.write_u64::<LittleEndian>(len).unwrap();
        }

        out.extend_from_slice(&payload);
        out
    }
}
