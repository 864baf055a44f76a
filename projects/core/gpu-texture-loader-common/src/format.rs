//! Pixel format identities and their memory-layout properties.

use crate::range::TextureRangeDesc;

/// Defines a known pixel format for texture data held in a GPU container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// Unrecognized or unsupported pixel format.
    /// Lookups never substitute a default; unknown codes map here.
    Invalid,
    R8,
    RG88,
    RGB565,
    RGB5A1,
    RGBA4444,
    RGBA8888,
    RGBA8888Srgb,
    BGRA8888,
    BGRA8888Srgb,
    RGB10A2,
    R16,
    RG1616,
    R16F,
    RG16F,
    RGBA16F,
    R32F,
    RG32F,
    RGBA32F,
    /// a.k.a. DXT1
    BC1,
    BC1Srgb,
    /// a.k.a. DXT2/3
    BC2,
    BC2Srgb,
    /// a.k.a. DXT4/5
    BC3,
    BC3Srgb,
    BC4,
    BC5,
    BC6H,
    BC7,
    BC7Srgb,
    Etc2Rgb8,
    Etc2Rgb8Srgb,
    Etc2Rgba8,
    Etc2Rgba8Srgb,
    EacR11,
    EacRg11,
    Astc4x4,
    Astc4x4Srgb,
    Astc5x5,
    Astc6x6,
    Astc8x8,
}

/// Memory-layout properties of a [`TextureFormat`].
///
/// For uncompressed formats a "block" is a single pixel; for
/// block-compressed formats it is the fixed compression footprint
/// (e.g. 4x4 pixels in 8 or 16 bytes for the BCn family).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatProperties {
    pub format: TextureFormat,
    pub bytes_per_block: u32,
    pub block_width: u32,
    pub block_height: u32,
    pub compressed: bool,
}

impl FormatProperties {
    /// Sentinel returned for unrecognized format codes.
    pub const INVALID: FormatProperties = FormatProperties {
        format: TextureFormat::Invalid,
        bytes_per_block: 0,
        block_width: 1,
        block_height: 1,
        compressed: false,
    };

    /// Properties for an uncompressed format storing `bytes_per_pixel` per pixel.
    pub const fn uncompressed(format: TextureFormat, bytes_per_pixel: u32) -> Self {
        Self {
            format,
            bytes_per_block: bytes_per_pixel,
            block_width: 1,
            block_height: 1,
            compressed: false,
        }
    }

    /// Properties for a block-compressed format storing `bytes_per_block`
    /// per `block_width` x `block_height` pixel footprint.
    pub const fn block_compressed(
        format: TextureFormat,
        bytes_per_block: u32,
        block_width: u32,
        block_height: u32,
    ) -> Self {
        Self {
            format,
            bytes_per_block,
            block_width,
            block_height,
            compressed: true,
        }
    }

    /// `false` for the [`FormatProperties::INVALID`] sentinel.
    pub const fn is_valid(&self) -> bool {
        !matches!(self.format, TextureFormat::Invalid)
    }

    /// Total byte size of the pixel data covering `range` in this format.
    ///
    /// Dimensions are rounded up to whole blocks, then multiplied across
    /// depth slices, array layers and faces. Saturating `u64` math: hostile
    /// headers produce a size no buffer can satisfy instead of a wrapped
    /// small one.
    pub fn bytes_per_range(&self, range: TextureRangeDesc) -> u64 {
        let blocks_wide = u64::from(range.width.div_ceil(self.block_width));
        let blocks_high = u64::from(range.height.div_ceil(self.block_height));

        blocks_wide
            .saturating_mul(blocks_high)
            .saturating_mul(u64::from(self.bytes_per_block))
            .saturating_mul(u64::from(range.depth))
            .saturating_mul(u64::from(range.num_layers))
            .saturating_mul(u64::from(range.num_faces))
    }
}
