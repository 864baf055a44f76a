//! Structural validation and mip-layout resolution for KTX2 buffers.

use alloc::vec;

use gpu_texture_loader_api::error::{TextureLoadError, TextureLoadResult};
use gpu_texture_loader_api::loaded::{LoadedTexture, MipDataRange};
use gpu_texture_loader_api::traits::TextureContainerLoader;
use gpu_texture_loader_api::DataReader;
use gpu_texture_loader_common::align::{align_to, lcm};
use gpu_texture_loader_common::range::{RangeError, TextureRangeDesc};

use super::constants::*;
use super::header::Ktx2Header;

/// Loader for the KTX2 container format.
///
/// Supports uncompressed and block-compressed payloads without
/// supercompression. The level index has no checksum, so
/// [`load`](TextureContainerLoader::load) recomputes the entire mip layout
/// from the header and treats any divergence from the on-disk index as
/// corruption.
pub struct Ktx2Loader;

impl TextureContainerLoader for Ktx2Loader {
    fn header_length(&self) -> usize {
        KTX2_HEADER_SIZE
    }

    fn can_load(&self, data: &[u8]) -> TextureLoadResult<()> {
        if data.len() < KTX2_HEADER_SIZE {
            return Err(TextureLoadError::MalformedHeader {
                reason: "not enough data for the fixed header",
            });
        }

        if data[..KTX2_IDENTIFIER.len()] != KTX2_IDENTIFIER {
            return Err(TextureLoadError::MalformedHeader {
                reason: "incorrect identifier",
            });
        }

        let header = Ktx2Header::read_from(&DataReader::new(data))?;

        if header.vk_format == 0 {
            return Err(TextureLoadError::UnsupportedFeature {
                reason: "Basis Universal textures are not supported",
            });
        }

        if !header.format_properties().is_valid() {
            return Err(TextureLoadError::UnsupportedFeature {
                reason: "unrecognized pixel format",
            });
        }

        if header.face_count == 6 && header.layer_count > 1 {
            return Err(TextureLoadError::UnsupportedFeature {
                reason: "texture cube arrays are not supported",
            });
        }

        if header.layer_count > 1 && header.pixel_depth > 1 {
            return Err(TextureLoadError::UnsupportedFeature {
                reason: "3D texture arrays are not supported",
            });
        }

        if header.supercompression_scheme != 0 {
            return Err(TextureLoadError::UnsupportedFeature {
                reason: "supercompression is not supported",
            });
        }

        Ok(())
    }

    fn load<'a>(&self, data: &'a [u8]) -> TextureLoadResult<LoadedTexture<'a>> {
        self.can_load(data)?;

        let reader = DataReader::new(data);
        let header = Ktx2Header::read_from(&reader)?;
        let length = reader.len() as u64;

        if header.sgd_byte_length > usize::MAX as u64 {
            return Err(RangeError::UnaddressableByteLength {
                byte_length: header.sgd_byte_length,
            }
            .into());
        }

        if header.face_count != 1 && header.face_count != 6 {
            return Err(RangeError::FaceCountNotSupported {
                num_faces: header.face_count,
            }
            .into());
        }
        if header.face_count == 6 {
            if header.pixel_depth != 0 {
                return Err(RangeError::CubeMustBeFlat {
                    depth: header.pixel_depth,
                }
                .into());
            }
            if header.pixel_width != header.pixel_height {
                return Err(RangeError::CubeMustBeSquare {
                    width: header.pixel_width,
                    height: header.pixel_height,
                }
                .into());
            }
        }

        let metadata_blocks = u64::from(header.dfd_byte_length)
            + u64::from(header.kvd_byte_length)
            + header.sgd_byte_length;
        if metadata_blocks > length {
            return Err(TextureLoadError::TruncatedData {
                required: metadata_blocks,
                actual: length,
            });
        }

        // Zero for width/height/depth and layer/level counts means "not
        // used"; the resolved range collapses them to 1.
        let range = TextureRangeDesc {
            width: header.pixel_width.max(1),
            height: header.pixel_height.max(1),
            depth: header.pixel_depth.max(1),
            num_mip_levels: header.level_count.max(1),
            num_layers: header.layer_count.max(1),
            num_faces: header.face_count,
        };
        range.validate()?;

        let properties = header.format_properties();

        // Each level must start on a block boundary and a 4-byte boundary
        // simultaneously.
        let mip_alignment = lcm(u64::from(properties.bytes_per_block), 4);

        let mut total_pixel_bytes = 0u64;
        for mip_level in 0..range.num_mip_levels {
            let level_bytes = properties.bytes_per_range(range.at_mip_level(mip_level));
            total_pixel_bytes =
                total_pixel_bytes.saturating_add(align_to(level_bytes, mip_alignment));
        }
        if total_pixel_bytes > length {
            return Err(TextureLoadError::TruncatedData {
                required: total_pixel_bytes,
                actual: length,
            });
        }

        let level_index_length = u64::from(range.num_mip_levels) * LEVEL_INDEX_ENTRY_SIZE as u64;
        let pre_sgd_metadata_length = KTX2_HEADER_SIZE as u64
            + level_index_length
            + u64::from(header.dfd_byte_length)
            + u64::from(header.kvd_byte_length);
        let metadata_length = if header.sgd_byte_length > 0 {
            align_to(pre_sgd_metadata_length, SGD_ALIGNMENT) + header.sgd_byte_length
        } else {
            pre_sgd_metadata_length
        };

        let data_region_start = align_to(metadata_length, mip_alignment);
        let expected_length = data_region_start.saturating_add(total_pixel_bytes);
        if length < expected_length {
            return Err(TextureLoadError::TruncatedData {
                required: expected_length,
                actual: length,
            });
        }

        // The level index is ordered largest image first, but the data
        // region stores the smallest level first. Walk in storage order so
        // one running offset both predicts and checks every entry.
        let mut mip_ranges = vec![
            MipDataRange {
                byte_offset: 0,
                byte_length: 0,
            };
            range.num_mip_levels as usize
        ];
        let mut running_offset = data_region_start;

        for i in 0..range.num_mip_levels {
            let mip_level = range.num_mip_levels - 1 - i;
            let entry_offset = level_entry_offset(mip_level);

            let byte_offset = reader.read_u64_at(entry_offset)?;
            let byte_length = reader.read_u64_at(entry_offset + 8)?;
            let uncompressed_byte_length = reader.read_u64_at(entry_offset + 16)?;

            if byte_length != uncompressed_byte_length {
                return Err(TextureLoadError::UnsupportedFeature {
                    reason: "supercompressed level data is not supported",
                });
            }

            if byte_offset != running_offset {
                return Err(TextureLoadError::InconsistentMetadata {
                    mip_level,
                    reason: "declared byteOffset does not match the computed layout",
                });
            }

            let expected_bytes = properties.bytes_per_range(range.at_mip_level(mip_level));
            if byte_length != expected_bytes {
                return Err(TextureLoadError::InconsistentMetadata {
                    mip_level,
                    reason: "declared byteLength does not match the computed size",
                });
            }

            mip_ranges[mip_level as usize] = MipDataRange {
                byte_offset: running_offset as usize,
                byte_length: byte_length as usize,
            };
            running_offset = align_to(running_offset + byte_length, mip_alignment);
        }

        Ok(LoadedTexture::new(
            data,
            range,
            properties.format,
            mip_ranges,
            header.level_count == 0,
        ))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["ktx2"]
    }
}
