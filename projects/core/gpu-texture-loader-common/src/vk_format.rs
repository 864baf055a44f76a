//! Vulkan format codes and the compiled-in properties table.
//!
//! GPU texture containers identify their pixel data with the numeric
//! `VkFormat` codes from the Vulkan specification. The table below maps the
//! supported subset to [`FormatProperties`]; it is immutable, resolved at
//! compile time and safe to consult from any number of threads.
#![allow(dead_code)]

use crate::format::{FormatProperties, TextureFormat};

pub const VK_FORMAT_UNDEFINED: u32 = 0;

pub const VK_FORMAT_R4G4B4A4_UNORM_PACK16: u32 = 2;
pub const VK_FORMAT_R5G6B5_UNORM_PACK16: u32 = 4;
pub const VK_FORMAT_R5G5B5A1_UNORM_PACK16: u32 = 6;

pub const VK_FORMAT_R8_UNORM: u32 = 9;
pub const VK_FORMAT_R8G8_UNORM: u32 = 16;
pub const VK_FORMAT_R8G8B8A8_UNORM: u32 = 37;
pub const VK_FORMAT_R8G8B8A8_SRGB: u32 = 43;
pub const VK_FORMAT_B8G8R8A8_UNORM: u32 = 44;
pub const VK_FORMAT_B8G8R8A8_SRGB: u32 = 50;

pub const VK_FORMAT_A2B10G10R10_UNORM_PACK32: u32 = 64;

pub const VK_FORMAT_R16_UNORM: u32 = 70;
pub const VK_FORMAT_R16_SFLOAT: u32 = 76;
pub const VK_FORMAT_R16G16_UNORM: u32 = 77;
pub const VK_FORMAT_R16G16_SFLOAT: u32 = 83;
pub const VK_FORMAT_R16G16B16A16_SFLOAT: u32 = 97;

pub const VK_FORMAT_R32_SFLOAT: u32 = 100;
pub const VK_FORMAT_R32G32_SFLOAT: u32 = 103;
pub const VK_FORMAT_R32G32B32A32_SFLOAT: u32 = 109;

pub const VK_FORMAT_BC1_RGBA_UNORM_BLOCK: u32 = 133;
pub const VK_FORMAT_BC1_RGBA_SRGB_BLOCK: u32 = 134;
pub const VK_FORMAT_BC2_UNORM_BLOCK: u32 = 135;
pub const VK_FORMAT_BC2_SRGB_BLOCK: u32 = 136;
pub const VK_FORMAT_BC3_UNORM_BLOCK: u32 = 137;
pub const VK_FORMAT_BC3_SRGB_BLOCK: u32 = 138;
pub const VK_FORMAT_BC4_UNORM_BLOCK: u32 = 139;
pub const VK_FORMAT_BC5_UNORM_BLOCK: u32 = 141;
pub const VK_FORMAT_BC6H_UFLOAT_BLOCK: u32 = 143;
pub const VK_FORMAT_BC7_UNORM_BLOCK: u32 = 145;
pub const VK_FORMAT_BC7_SRGB_BLOCK: u32 = 146;

pub const VK_FORMAT_ETC2_R8G8B8_UNORM_BLOCK: u32 = 147;
pub const VK_FORMAT_ETC2_R8G8B8_SRGB_BLOCK: u32 = 148;
pub const VK_FORMAT_ETC2_R8G8B8A8_UNORM_BLOCK: u32 = 151;
pub const VK_FORMAT_ETC2_R8G8B8A8_SRGB_BLOCK: u32 = 152;
pub const VK_FORMAT_EAC_R11_UNORM_BLOCK: u32 = 153;
pub const VK_FORMAT_EAC_R11G11_UNORM_BLOCK: u32 = 155;

pub const VK_FORMAT_ASTC_4X4_UNORM_BLOCK: u32 = 157;
pub const VK_FORMAT_ASTC_4X4_SRGB_BLOCK: u32 = 158;
pub const VK_FORMAT_ASTC_5X5_UNORM_BLOCK: u32 = 161;
pub const VK_FORMAT_ASTC_6X6_UNORM_BLOCK: u32 = 165;
pub const VK_FORMAT_ASTC_8X8_UNORM_BLOCK: u32 = 171;

/// Looks up the memory-layout properties for a Vulkan format code.
///
/// Unknown codes return [`FormatProperties::INVALID`], never a default.
pub const fn format_properties(vk_format: u32) -> FormatProperties {
    match vk_format {
        VK_FORMAT_R4G4B4A4_UNORM_PACK16 => {
            FormatProperties::uncompressed(TextureFormat::RGBA4444, 2)
        }
        VK_FORMAT_R5G6B5_UNORM_PACK16 => FormatProperties::uncompressed(TextureFormat::RGB565, 2),
        VK_FORMAT_R5G5B5A1_UNORM_PACK16 => FormatProperties::uncompressed(TextureFormat::RGB5A1, 2),

        VK_FORMAT_R8_UNORM => FormatProperties::uncompressed(TextureFormat::R8, 1),
        VK_FORMAT_R8G8_UNORM => FormatProperties::uncompressed(TextureFormat::RG88, 2),
        VK_FORMAT_R8G8B8A8_UNORM => FormatProperties::uncompressed(TextureFormat::RGBA8888, 4),
        VK_FORMAT_R8G8B8A8_SRGB => FormatProperties::uncompressed(TextureFormat::RGBA8888Srgb, 4),
        VK_FORMAT_B8G8R8A8_UNORM => FormatProperties::uncompressed(TextureFormat::BGRA8888, 4),
        VK_FORMAT_B8G8R8A8_SRGB => FormatProperties::uncompressed(TextureFormat::BGRA8888Srgb, 4),

        VK_FORMAT_A2B10G10R10_UNORM_PACK32 => {
            FormatProperties::uncompressed(TextureFormat::RGB10A2, 4)
        }

        VK_FORMAT_R16_UNORM => FormatProperties::uncompressed(TextureFormat::R16, 2),
        VK_FORMAT_R16_SFLOAT => FormatProperties::uncompressed(TextureFormat::R16F, 2),
        VK_FORMAT_R16G16_UNORM => FormatProperties::uncompressed(TextureFormat::RG1616, 4),
        VK_FORMAT_R16G16_SFLOAT => FormatProperties::uncompressed(TextureFormat::RG16F, 4),
        VK_FORMAT_R16G16B16A16_SFLOAT => FormatProperties::uncompressed(TextureFormat::RGBA16F, 8),

        VK_FORMAT_R32_SFLOAT => FormatProperties::uncompressed(TextureFormat::R32F, 4),
        VK_FORMAT_R32G32_SFLOAT => FormatProperties::uncompressed(TextureFormat::RG32F, 8),
        VK_FORMAT_R32G32B32A32_SFLOAT => FormatProperties::uncompressed(TextureFormat::RGBA32F, 16),

        VK_FORMAT_BC1_RGBA_UNORM_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::BC1, 8, 4, 4)
        }
        VK_FORMAT_BC1_RGBA_SRGB_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::BC1Srgb, 8, 4, 4)
        }
        VK_FORMAT_BC2_UNORM_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::BC2, 16, 4, 4)
        }
        VK_FORMAT_BC2_SRGB_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::BC2Srgb, 16, 4, 4)
        }
        VK_FORMAT_BC3_UNORM_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::BC3, 16, 4, 4)
        }
        VK_FORMAT_BC3_SRGB_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::BC3Srgb, 16, 4, 4)
        }
        VK_FORMAT_BC4_UNORM_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::BC4, 8, 4, 4)
        }
        VK_FORMAT_BC5_UNORM_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::BC5, 16, 4, 4)
        }
        VK_FORMAT_BC6H_UFLOAT_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::BC6H, 16, 4, 4)
        }
        VK_FORMAT_BC7_UNORM_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::BC7, 16, 4, 4)
        }
        VK_FORMAT_BC7_SRGB_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::BC7Srgb, 16, 4, 4)
        }

        VK_FORMAT_ETC2_R8G8B8_UNORM_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::Etc2Rgb8, 8, 4, 4)
        }
        VK_FORMAT_ETC2_R8G8B8_SRGB_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::Etc2Rgb8Srgb, 8, 4, 4)
        }
        VK_FORMAT_ETC2_R8G8B8A8_UNORM_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::Etc2Rgba8, 16, 4, 4)
        }
        VK_FORMAT_ETC2_R8G8B8A8_SRGB_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::Etc2Rgba8Srgb, 16, 4, 4)
        }
        VK_FORMAT_EAC_R11_UNORM_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::EacR11, 8, 4, 4)
        }
        VK_FORMAT_EAC_R11G11_UNORM_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::EacRg11, 16, 4, 4)
        }

        VK_FORMAT_ASTC_4X4_UNORM_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::Astc4x4, 16, 4, 4)
        }
        VK_FORMAT_ASTC_4X4_SRGB_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::Astc4x4Srgb, 16, 4, 4)
        }
        VK_FORMAT_ASTC_5X5_UNORM_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::Astc5x5, 16, 5, 5)
        }
        VK_FORMAT_ASTC_6X6_UNORM_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::Astc6x6, 16, 6, 6)
        }
        VK_FORMAT_ASTC_8X8_UNORM_BLOCK => {
            FormatProperties::block_compressed(TextureFormat::Astc8x8, 16, 8, 8)
        }

        _ => FormatProperties::INVALID,
    }
}
