#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

/// Byte-alignment arithmetic used by the container layout math.
pub mod align;

/// Pixel format identities and their memory-layout properties.
pub mod format;

/// Texture subresource ranges and their consistency rules.
pub mod range;

/// Vulkan format codes as carried by GPU texture containers.
pub mod vk_format;

// Re-export key types
pub use format::{FormatProperties, TextureFormat};
pub use range::{RangeError, TextureRangeDesc, TextureType};
