//! A device that records calls instead of talking to a GPU.
//!
//! Used by tests and doc examples to assert on the exact sequence of
//! texture creations and level writes.

use parking_lot::Mutex;
use texload_format::{Extent3d, TextureDataLayout};

use crate::device::{GpuDevice, Origin3d, TexelCopyTexture, TextureAspect, TextureDescriptor};

/// Handle returned by [`RecordingDevice::create_texture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// A call made against a [`RecordingDevice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceCall {
    CreateTexture {
        id: TextureId,
        descriptor: TextureDescriptor<'static>,
    },
    WriteTexture {
        texture: TextureId,
        mip_level: u32,
        origin: Origin3d,
        aspect: TextureAspect,
        data: Vec<u8>,
        layout: TextureDataLayout,
        size: Extent3d,
    },
}

#[derive(Debug, Default)]
pub struct RecordingDevice {
    calls: Mutex<Vec<DeviceCall>>,
    next_id: Mutex<u32>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far, in order.
    pub fn calls(&self) -> Vec<DeviceCall> {
        self.calls.lock().clone()
    }

    /// Drain the recorded calls.
    pub fn take_calls(&self) -> Vec<DeviceCall> {
        std::mem::take(&mut *self.calls.lock())
    }

    /// Only the `write_texture` calls.
    pub fn writes(&self) -> Vec<DeviceCall> {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, DeviceCall::WriteTexture { .. }))
            .cloned()
            .collect()
    }
}

impl GpuDevice for RecordingDevice {
    type Texture = TextureId;

    fn create_texture(&self, descriptor: &TextureDescriptor<'_>) -> TextureId {
        let id = {
            let mut next = self.next_id.lock();
            let id = TextureId(*next);
            *next += 1;
            id
        };
        self.calls.lock().push(DeviceCall::CreateTexture {
            id,
            descriptor: descriptor.clone().into_owned(),
        });
        id
    }

    fn write_texture(
        &self,
        destination: TexelCopyTexture<'_, TextureId>,
        data: &[u8],
        layout: TextureDataLayout,
        size: Extent3d,
    ) {
        self.calls.lock().push(DeviceCall::WriteTexture {
            texture: *destination.texture,
            mip_level: destination.mip_level,
            origin: destination.origin,
            aspect: destination.aspect,
            data: data.to_vec(),
            layout,
            size,
        });
    }
}
