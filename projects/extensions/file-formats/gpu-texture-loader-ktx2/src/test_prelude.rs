//! Common test imports and synthetic-file builders for KTX2 tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crate declaration for no_std compatibility
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

use crate::ktx2::constants::*;
use endian_writer::{EndianWriter, LittleEndianWriter};
use gpu_texture_loader_common::align::{align_to, lcm};
use gpu_texture_loader_common::range::TextureRangeDesc;
use gpu_texture_loader_common::vk_format::{format_properties, VK_FORMAT_R8G8B8A8_UNORM};

/// Header fields for a synthetic KTX2 file.
///
/// Defaults describe a 4x4 single-level RGBA8 2D texture with no metadata
/// blocks. Raw header semantics apply: zero for depth/layer/level fields
/// means "not used".
#[derive(Debug, Clone, Copy)]
pub struct Ktx2Spec {
    pub vk_format: u32,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub layer_count: u32,
    pub face_count: u32,
    pub level_count: u32,
    pub supercompression_scheme: u32,
    pub dfd_byte_length: u32,
    pub kvd_byte_length: u32,
    pub sgd_byte_length: u64,
}

impl Default for Ktx2Spec {
    fn default() -> Self {
        Self {
            vk_format: VK_FORMAT_R8G8B8A8_UNORM,
            width: 4,
            height: 4,
            depth: 0,
            layer_count: 0,
            face_count: 1,
            level_count: 1,
            supercompression_scheme: 0,
            dfd_byte_length: 0,
            kvd_byte_length: 0,
            sgd_byte_length: 0,
        }
    }
}

/// Builds a complete KTX2 file laid out exactly as the loader predicts:
/// level index in table order, metadata blocks zero-filled, pixel data in
/// storage order (smallest level first) with a recognizable byte pattern.
pub fn create_ktx2(spec: &Ktx2Spec) -> Vec<u8> {
    let properties = format_properties(spec.vk_format);
    let num_levels = spec.level_count.max(1);
    let range = TextureRangeDesc {
        width: spec.width.max(1),
        height: spec.height.max(1),
        depth: spec.depth.max(1),
        num_mip_levels: num_levels,
        num_layers: spec.layer_count.max(1),
        num_faces: spec.face_count.max(1),
    };

    // Unknown formats have no block size; fall back so gate tests can still
    // build a structurally complete file.
    let bytes_per_block = properties.bytes_per_block.max(1);
    let mip_alignment = lcm(u64::from(bytes_per_block), 4);

    let level_index_length = u64::from(num_levels) * LEVEL_INDEX_ENTRY_SIZE as u64;
    let pre_sgd_metadata_length = KTX2_HEADER_SIZE as u64
        + level_index_length
        + u64::from(spec.dfd_byte_length)
        + u64::from(spec.kvd_byte_length);
    let metadata_length = if spec.sgd_byte_length > 0 {
        align_to(pre_sgd_metadata_length, SGD_ALIGNMENT) + spec.sgd_byte_length
    } else {
        pre_sgd_metadata_length
    };
    let data_region_start = align_to(metadata_length, mip_alignment);

    // Per-level byte offsets and lengths, walking storage order so each
    // level lands where the loader expects it.
    let mut level_offsets = vec![0u64; num_levels as usize];
    let mut level_lengths = vec![0u64; num_levels as usize];
    let mut running_offset = data_region_start;
    for i in 0..num_levels {
        let mip_level = num_levels - 1 - i;
        let level_bytes = if properties.is_valid() {
            properties.bytes_per_range(range.at_mip_level(mip_level))
        } else {
            u64::from(bytes_per_block)
                * u64::from(range.at_mip_level(mip_level).width)
                * u64::from(range.at_mip_level(mip_level).height)
        };
        level_offsets[mip_level as usize] = running_offset;
        level_lengths[mip_level as usize] = level_bytes;
        running_offset = align_to(running_offset + level_bytes, mip_alignment);
    }

    let mut data = vec![0u8; running_offset as usize];
    data[..KTX2_IDENTIFIER.len()].copy_from_slice(&KTX2_IDENTIFIER);

    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(spec.vk_format, VK_FORMAT_OFFSET as isize);
        writer.write_u32_at(1, TYPE_SIZE_OFFSET as isize);
        writer.write_u32_at(spec.width, PIXEL_WIDTH_OFFSET as isize);
        writer.write_u32_at(spec.height, PIXEL_HEIGHT_OFFSET as isize);
        writer.write_u32_at(spec.depth, PIXEL_DEPTH_OFFSET as isize);
        writer.write_u32_at(spec.layer_count, LAYER_COUNT_OFFSET as isize);
        writer.write_u32_at(spec.face_count, FACE_COUNT_OFFSET as isize);
        writer.write_u32_at(spec.level_count, LEVEL_COUNT_OFFSET as isize);
        writer.write_u32_at(
            spec.supercompression_scheme,
            SUPERCOMPRESSION_SCHEME_OFFSET as isize,
        );

        let dfd_byte_offset = if spec.dfd_byte_length > 0 {
            (KTX2_HEADER_SIZE as u64 + level_index_length) as u32
        } else {
            0
        };
        writer.write_u32_at(dfd_byte_offset, DFD_BYTE_OFFSET_OFFSET as isize);
        writer.write_u32_at(spec.dfd_byte_length, DFD_BYTE_LENGTH_OFFSET as isize);

        let kvd_byte_offset = if spec.kvd_byte_length > 0 {
            (KTX2_HEADER_SIZE as u64 + level_index_length + u64::from(spec.dfd_byte_length)) as u32
        } else {
            0
        };
        writer.write_u32_at(kvd_byte_offset, KVD_BYTE_OFFSET_OFFSET as isize);
        writer.write_u32_at(spec.kvd_byte_length, KVD_BYTE_LENGTH_OFFSET as isize);

        let sgd_byte_offset = if spec.sgd_byte_length > 0 {
            align_to(pre_sgd_metadata_length, SGD_ALIGNMENT)
        } else {
            0
        };
        writer.write_u64_at(sgd_byte_offset, SGD_BYTE_OFFSET_OFFSET as isize);
        writer.write_u64_at(spec.sgd_byte_length, SGD_BYTE_LENGTH_OFFSET as isize);

        for mip_level in 0..num_levels {
            let entry = level_entry_offset(mip_level) as isize;
            writer.write_u64_at(level_offsets[mip_level as usize], entry);
            writer.write_u64_at(level_lengths[mip_level as usize], entry + 8);
            writer.write_u64_at(level_lengths[mip_level as usize], entry + 16);
        }
    }

    // Fill pixel data area with test pattern
    let data_start = data_region_start as usize;
    #[allow(clippy::needless_range_loop)]
    for x in data_start..data.len() {
        data[x] = ((x - data_start) % 256) as u8;
    }

    data
}

/// Builds a valid 2D KTX2 file with the given format and mip chain.
pub fn create_valid_ktx2_with_dimensions(
    vk_format: u32,
    width: u32,
    height: u32,
    level_count: u32,
) -> Vec<u8> {
    create_ktx2(&Ktx2Spec {
        vk_format,
        width,
        height,
        level_count,
        ..Ktx2Spec::default()
    })
}

/// Overwrites a little-endian `u32` field in a built file.
pub fn patch_u32(data: &mut [u8], offset: usize, value: u32) {
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe { writer.write_u32_at(value, offset as isize) };
}

/// Overwrites a little-endian `u64` field in a built file.
pub fn patch_u64(data: &mut [u8], offset: usize, value: u64) {
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe { writer.write_u64_at(value, offset as isize) };
}
