#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// Core modules
pub mod error;
pub mod loaded;
pub mod reader;
pub mod registry;
pub mod traits;

// Re-export key types
pub use error::{TextureLoadError, TextureLoadResult};
pub use loaded::{LoadedTexture, MipDataRange};
pub use reader::DataReader;
pub use registry::LoaderRegistry;
pub use traits::{TextureContainerLoader, TextureSink};
