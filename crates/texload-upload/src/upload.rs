//! One-call uploads.

use texload_format::TextureSource;

use crate::device::{GpuDevice, TextureUsages};
use crate::plan::{UploadOptions, UploadPlan};
use crate::Result;

/// Create a texture for `source` and upload every mip level into it.
///
/// `COPY_DST` is added to `usage`. All levels are read and validated before
/// the texture is created, so a failing source never reaches the device.
pub fn upload_all_levels<S, D>(source: &S, device: &D, usage: TextureUsages) -> Result<D::Texture>
where
    S: TextureSource + ?Sized,
    D: GpuDevice + ?Sized,
{
    upload_with_options(source, device, &UploadOptions::with_usage(usage))
}

/// Like [`upload_all_levels`], with a label and an optional mip count.
pub fn upload_with_options<S, D>(
    source: &S,
    device: &D,
    options: &UploadOptions<'_>,
) -> Result<D::Texture>
where
    S: TextureSource + ?Sized,
    D: GpuDevice + ?Sized,
{
    let plan = UploadPlan::build(source, options)?;
    Ok(plan.submit(device))
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use texload_format::{
        check_mip, format_layout_info, Error as TextureError, Extent3d, LevelLayout, ShapeCounts,
        TextureDataLayout, TextureDimension, TextureFormat,
    };
    use texload_image::StandardImage;

    use super::*;
    use crate::{DeviceCall, Origin3d, RecordingDevice, TextureAspect, TextureId, UploadError};

    struct FakeSource {
        format: TextureFormat,
        shape: ShapeCounts,
        levels: Vec<Vec<u8>>,
        fail_at: Option<u32>,
    }

    impl FakeSource {
        /// A full chain of `count` exactly sized levels, each filled with its mip index.
        fn chain(format: TextureFormat, shape: ShapeCounts, count: u32) -> Self {
            let info = format_layout_info(format).unwrap();
            let levels = (0..count)
                .map(|mip| {
                    let size = LevelLayout::compute(info, &shape, mip)
                        .unwrap()
                        .byte_size()
                        .unwrap();
                    vec![mip as u8; size as usize]
                })
                .collect();
            Self {
                format,
                shape,
                levels,
                fail_at: None,
            }
        }
    }

    impl TextureSource for FakeSource {
        fn format(&self) -> TextureFormat {
            self.format
        }

        fn dimension(&self) -> TextureDimension {
            self.shape.dimension()
        }

        fn level_count(&self) -> u32 {
            self.levels.len() as u32
        }

        fn extent(&self) -> Extent3d {
            self.shape.base_extent().unwrap()
        }

        fn level_data(&self, mip: u32) -> texload_format::Result<Cow<'_, [u8]>> {
            check_mip(mip, self.level_count())?;
            if self.fail_at == Some(mip) {
                return Err(TextureError::UnsupportedCompression(2));
            }
            Ok(Cow::Borrowed(&self.levels[mip as usize]))
        }

        fn level_layout(&self, mip: u32) -> texload_format::Result<LevelLayout> {
            check_mip(mip, self.level_count())?;
            let info = format_layout_info(self.format)
                .ok_or(TextureError::FormatNotCopyable(self.format))?;
            LevelLayout::compute(info, &self.shape, mip)
        }
    }

    fn write_summary(call: &DeviceCall) -> (u32, TextureDataLayout, Extent3d, usize) {
        match call {
            DeviceCall::WriteTexture {
                mip_level,
                layout,
                size,
                data,
                ..
            } => (*mip_level, *layout, *size, data.len()),
            other => panic!("expected a write, got {other:?}"),
        }
    }

    #[test]
    fn test_rgba8_single_level() {
        let source = FakeSource::chain(
            TextureFormat::Rgba8Unorm,
            ShapeCounts::image_2d(256, 256),
            1,
        );
        let device = RecordingDevice::new();
        let texture =
            upload_all_levels(&source, &device, TextureUsages::TEXTURE_BINDING).unwrap();

        let calls = device.calls();
        assert_eq!(calls.len(), 2);

        let DeviceCall::CreateTexture { id, descriptor } = &calls[0] else {
            panic!("first call must create the texture");
        };
        assert_eq!(*id, texture);
        assert_eq!(
            descriptor.usage,
            TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST
        );
        assert_eq!(descriptor.dimension, TextureDimension::D2);
        assert_eq!(descriptor.size, Extent3d::new(256, 256, 1));
        assert_eq!(descriptor.mip_level_count, 1);
        assert_eq!(descriptor.sample_count, 1);
        assert_eq!(descriptor.view_formats, vec![TextureFormat::Rgba8Unorm]);

        assert_eq!(
            calls[1],
            DeviceCall::WriteTexture {
                texture,
                mip_level: 0,
                origin: Origin3d::ZERO,
                aspect: TextureAspect::All,
                data: vec![0; 256 * 256 * 4],
                layout: TextureDataLayout {
                    offset: 0,
                    bytes_per_row: 1024,
                    rows_per_image: 256,
                },
                size: Extent3d::new(256, 256, 1),
            }
        );
    }

    #[test]
    fn test_bc1_single_level() {
        let source = FakeSource::chain(
            TextureFormat::Bc1RgbaUnorm,
            ShapeCounts::image_2d(256, 256),
            1,
        );
        let device = RecordingDevice::new();
        upload_all_levels(&source, &device, TextureUsages::empty()).unwrap();

        let writes = device.writes();
        let (_, layout, size, len) = write_summary(&writes[0]);
        assert_eq!(layout.bytes_per_row, 512);
        assert_eq!(layout.rows_per_image, 64);
        assert_eq!(size, Extent3d::new(256, 256, 1));
        assert_eq!(len, 512 * 64);
    }

    #[test]
    fn test_levels_are_written_base_first() {
        let source = FakeSource::chain(TextureFormat::Rgba8Unorm, ShapeCounts::image_2d(16, 16), 5);
        let device = RecordingDevice::new();
        upload_all_levels(&source, &device, TextureUsages::TEXTURE_BINDING).unwrap();

        let writes = device.writes();
        assert_eq!(writes.len(), 5);
        for (mip, call) in writes.iter().enumerate() {
            let side = 16 >> mip;
            let (mip_level, layout, size, len) = write_summary(call);
            assert_eq!(mip_level, mip as u32);
            assert_eq!(size, Extent3d::new(side, side, 1));
            assert_eq!(layout.bytes_per_row, side * 4);
            assert_eq!(len, (side * side * 4) as usize);
        }
        match &writes[3] {
            DeviceCall::WriteTexture { data, .. } => assert!(data.iter().all(|&b| b == 3)),
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[test]
    fn test_cube_levels_keep_all_faces() {
        let shape = ShapeCounts {
            width: 8,
            height: 8,
            depth: 0,
            layer_count: 0,
            face_count: 6,
        };
        let source = FakeSource::chain(TextureFormat::Bc7RgbaUnorm, shape, 2);
        let device = RecordingDevice::new();
        upload_all_levels(&source, &device, TextureUsages::TEXTURE_BINDING).unwrap();

        let writes = device.writes();
        let (_, layout, size, len) = write_summary(&writes[1]);
        assert_eq!(size, Extent3d::new(4, 4, 6));
        assert_eq!(layout.bytes_per_row, 16);
        assert_eq!(layout.rows_per_image, 1);
        assert_eq!(len, 16 * 6);
    }

    #[test]
    fn test_failing_level_creates_nothing() {
        let mut source =
            FakeSource::chain(TextureFormat::Rgba8Unorm, ShapeCounts::image_2d(64, 64), 4);
        source.fail_at = Some(2);
        let device = RecordingDevice::new();

        let err = upload_all_levels(&source, &device, TextureUsages::TEXTURE_BINDING).unwrap_err();
        assert_eq!(
            err,
            UploadError::Source(TextureError::UnsupportedCompression(2))
        );
        assert!(device.calls().is_empty());
    }

    #[test]
    fn test_overflowing_layout_creates_nothing() {
        let source = FakeSource {
            format: TextureFormat::Rgba8Unorm,
            shape: ShapeCounts::image_2d(1 << 30, 1),
            levels: vec![vec![0; 16]],
            fail_at: None,
        };
        let device = RecordingDevice::new();

        let err = upload_all_levels(&source, &device, TextureUsages::TEXTURE_BINDING).unwrap_err();
        assert_eq!(
            err,
            UploadError::Source(TextureError::LayoutOverflow { mip: 0 })
        );
        assert!(device.calls().is_empty());
    }

    #[test]
    fn test_short_level_is_rejected() {
        let mut source =
            FakeSource::chain(TextureFormat::Rgba8Unorm, ShapeCounts::image_2d(8, 8), 2);
        source.levels[1].pop();
        let device = RecordingDevice::new();

        let err = upload_all_levels(&source, &device, TextureUsages::empty()).unwrap_err();
        assert_eq!(
            err,
            UploadError::LevelSizeMismatch {
                mip: 1,
                expected: 64,
                actual: 63
            }
        );
        assert!(device.calls().is_empty());
    }

    #[test]
    fn test_oversized_level_is_still_written() {
        let mut source =
            FakeSource::chain(TextureFormat::R8Unorm, ShapeCounts::image_2d(4, 4), 1);
        source.levels[0].extend_from_slice(&[0xAA; 4]);
        let device = RecordingDevice::new();

        upload_all_levels(&source, &device, TextureUsages::empty()).unwrap();
        let (_, layout, _, len) = write_summary(&device.writes()[0]);
        assert_eq!(layout.bytes_per_row, 4);
        assert_eq!(len, 20);
    }

    #[test]
    fn test_upload_is_repeatable() {
        let source = FakeSource::chain(TextureFormat::Rg16Float, ShapeCounts::image_2d(32, 8), 3);
        let device = RecordingDevice::new();

        let first = upload_all_levels(&source, &device, TextureUsages::TEXTURE_BINDING).unwrap();
        let first_writes = device.take_calls();
        let second = upload_all_levels(&source, &device, TextureUsages::TEXTURE_BINDING).unwrap();
        let second_writes = device.take_calls();

        assert_eq!(first, TextureId(0));
        assert_eq!(second, TextureId(1));
        assert_eq!(first_writes.len(), second_writes.len());
        for (a, b) in first_writes.iter().zip(&second_writes).skip(1) {
            assert_eq!(write_summary(a), write_summary(b));
        }
    }

    #[test]
    fn test_mip_count_is_clamped() {
        let source = FakeSource::chain(TextureFormat::Rgba8Unorm, ShapeCounts::image_2d(16, 16), 5);

        for (requested, uploaded) in [(2, 2), (0, 1), (99, 5)] {
            let device = RecordingDevice::new();
            let options = UploadOptions::with_usage(TextureUsages::TEXTURE_BINDING)
                .label("clamped")
                .mip_count(requested);
            upload_with_options(&source, &device, &options).unwrap();

            let calls = device.calls();
            let DeviceCall::CreateTexture { descriptor, .. } = &calls[0] else {
                panic!("first call must create the texture");
            };
            assert_eq!(descriptor.mip_level_count, uploaded);
            assert_eq!(descriptor.label.as_deref(), Some("clamped"));
            assert_eq!(calls.len() as u32, uploaded + 1);
        }
    }

    #[test]
    fn test_plan_without_device() {
        let source = FakeSource::chain(TextureFormat::Bc3RgbaUnorm, ShapeCounts::image_2d(64, 32), 3);
        let plan = UploadPlan::build(&source, &UploadOptions::default()).unwrap();

        assert_eq!(plan.descriptor.usage, TextureUsages::COPY_DST);
        assert_eq!(plan.levels.len(), 3);
        assert_eq!(plan.levels[2].extent, Extent3d::new(16, 8, 1));
        assert_eq!(plan.total_bytes(), 2048 + 512 + 128);
    }

    #[test]
    fn test_standard_image() {
        let image = StandardImage::from_rgba8(3, 2, vec![7; 24]).unwrap();
        let device = RecordingDevice::new();
        upload_all_levels(&image, &device, TextureUsages::TEXTURE_BINDING).unwrap();

        let writes = device.writes();
        assert_eq!(writes.len(), 1);
        let (mip, layout, size, len) = write_summary(&writes[0]);
        assert_eq!(mip, 0);
        assert_eq!(layout.bytes_per_row, 12);
        assert_eq!(layout.rows_per_image, 2);
        assert_eq!(size, Extent3d::new(3, 2, 1));
        assert_eq!(len, 24);
    }
}
