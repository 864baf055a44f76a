//! The fixed header region of a KTX2 file.

use gpu_texture_loader_api::reader::ReadOutOfRange;
use gpu_texture_loader_api::DataReader;
use gpu_texture_loader_common::format::FormatProperties;
use gpu_texture_loader_common::vk_format::format_properties;

use super::constants::*;

/// Semantic projection of the fixed KTX2 header.
///
/// Plain scalars read out of the buffer's first
/// [`KTX2_HEADER_SIZE`] bytes; owns nothing. Zero carries meaning for
/// several fields: width/height/depth 0 means "not used", `layer_count` 0
/// means one unspecified layer, and `level_count` 0 means "no authored mip
/// chain, generate mipmaps at runtime". The loader collapses these when
/// resolving; the header reports them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ktx2Header {
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

impl Ktx2Header {
    /// Reads the fixed header fields from the start of `reader`.
    pub fn read_from(reader: &DataReader<'_>) -> Result<Self, ReadOutOfRange> {
        Ok(Self {
            vk_format: reader.read_u32_at(VK_FORMAT_OFFSET)?,
            type_size: reader.read_u32_at(TYPE_SIZE_OFFSET)?,
            pixel_width: reader.read_u32_at(PIXEL_WIDTH_OFFSET)?,
            pixel_height: reader.read_u32_at(PIXEL_HEIGHT_OFFSET)?,
            pixel_depth: reader.read_u32_at(PIXEL_DEPTH_OFFSET)?,
            layer_count: reader.read_u32_at(LAYER_COUNT_OFFSET)?,
            face_count: reader.read_u32_at(FACE_COUNT_OFFSET)?,
            level_count: reader.read_u32_at(LEVEL_COUNT_OFFSET)?,
            supercompression_scheme: reader.read_u32_at(SUPERCOMPRESSION_SCHEME_OFFSET)?,
            dfd_byte_offset: reader.read_u32_at(DFD_BYTE_OFFSET_OFFSET)?,
            dfd_byte_length: reader.read_u32_at(DFD_BYTE_LENGTH_OFFSET)?,
            kvd_byte_offset: reader.read_u32_at(KVD_BYTE_OFFSET_OFFSET)?,
            kvd_byte_length: reader.read_u32_at(KVD_BYTE_LENGTH_OFFSET)?,
            sgd_byte_offset: reader.read_u64_at(SGD_BYTE_OFFSET_OFFSET)?,
            sgd_byte_length: reader.read_u64_at(SGD_BYTE_LENGTH_OFFSET)?,
        })
    }

    /// Memory-layout properties for this header's `vk_format`.
    pub fn format_properties(&self) -> FormatProperties {
        format_properties(self.vk_format)
    }
}
