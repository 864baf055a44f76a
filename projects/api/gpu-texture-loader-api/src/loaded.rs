//! The immutable result of a successful container load.

use alloc::vec::Vec;
use core::cmp::min;

use gpu_texture_loader_common::format::TextureFormat;
use gpu_texture_loader_common::range::{TextureRangeDesc, TextureType};

use crate::traits::TextureSink;

/// Byte range of one mip level's pixel data inside the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MipDataRange {
    pub byte_offset: usize,
    pub byte_length: usize,
}

/// A fully validated texture, resolved down to per-mip byte ranges.
///
/// Borrows the source buffer for its whole lifetime — mip data is
/// referenced in place, never copied, so a multi-hundred-megabyte texture
/// costs no extra memory between load and upload. Mip ranges are indexed in
/// table order: 0 is the largest image.
#[derive(Debug, Clone)]
pub struct LoadedTexture<'a> {
    data: &'a [u8],
    range: TextureRangeDesc,
    format: TextureFormat,
    texture_type: TextureType,
    mip_ranges: Vec<MipDataRange>,
    should_generate_mipmaps: bool,
}

impl<'a> LoadedTexture<'a> {
    /// Assembles a loaded texture from resolved layout facts.
    ///
    /// Called by container loaders after validation; `mip_ranges` must be
    /// in table order and in bounds of `data`.
    pub fn new(
        data: &'a [u8],
        range: TextureRangeDesc,
        format: TextureFormat,
        mip_ranges: Vec<MipDataRange>,
        should_generate_mipmaps: bool,
    ) -> Self {
        Self {
            data,
            range,
            format,
            texture_type: range.texture_type(),
            mip_ranges,
            should_generate_mipmaps,
        }
    }

    /// The source buffer this texture borrows from.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The resolved full-texture range (all fields ≥ 1).
    pub fn range(&self) -> TextureRangeDesc {
        self.range
    }

    pub fn format(&self) -> TextureFormat {
        self.format
    }

    pub fn texture_type(&self) -> TextureType {
        self.texture_type
    }

    /// Resolved byte ranges per mip level, 0 = largest.
    pub fn mip_ranges(&self) -> &[MipDataRange] {
        &self.mip_ranges
    }

    /// Pixel bytes of `mip_level`, or `None` past the resolved chain.
    pub fn mip_data(&self, mip_level: u32) -> Option<&'a [u8]> {
        let range = self.mip_ranges.get(mip_level as usize)?;
        Some(&self.data[range.byte_offset..range.byte_offset + range.byte_length])
    }

    /// `true` when the container declared no authored mip chain and the
    /// caller is expected to generate mipmaps at runtime.
    pub fn should_generate_mipmaps(&self) -> bool {
        self.should_generate_mipmaps
    }

    /// Uploads every resolved mip level into `sink`, largest first.
    ///
    /// All validation happened during load; this is a straight walk over
    /// the resolved ranges and cannot fail on its own. Sink failures
    /// belong to the sink.
    pub fn upload_to<S: TextureSink + ?Sized>(&self, sink: &mut S) {
        let levels = min(self.range.num_mip_levels as usize, self.mip_ranges.len());
        for mip_level in 0..levels {
            let range = self.mip_ranges[mip_level];
            let data = &self.data[range.byte_offset..range.byte_offset + range.byte_length];
            sink.upload(sink.full_range_for_level(mip_level as u32), data);
        }
    }
}
