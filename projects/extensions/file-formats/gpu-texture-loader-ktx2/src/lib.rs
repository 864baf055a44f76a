#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod ktx2;

#[cfg(test)]
pub(crate) mod test_prelude;

// Re-export key types
pub use ktx2::{Ktx2Header, Ktx2Loader};
