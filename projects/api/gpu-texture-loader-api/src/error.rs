//! Error types for texture container loading.

use crate::reader::ReadOutOfRange;
use gpu_texture_loader_common::range::RangeError;
use thiserror::Error;

/// Result type for texture container loading operations.
pub type TextureLoadResult<T> = Result<T, TextureLoadError>;

/// Reasons a byte buffer was rejected as a loadable texture container.
///
/// Malformed input is not transient: there is no retry path and no partial
/// result. A loader either produces a fully validated
/// [`LoadedTexture`](crate::LoadedTexture) or one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextureLoadError {
    /// The fixed header region is missing, too short, or carries the wrong
    /// identifier.
    #[error("malformed header: {reason}")]
    MalformedHeader { reason: &'static str },

    /// The file is structurally sound but uses a capability this loader
    /// does not implement (supercompression, cube arrays, unrecognized
    /// pixel formats, ...).
    #[error("unsupported feature: {reason}")]
    UnsupportedFeature { reason: &'static str },

    /// Declared dimensions or counts are mutually inconsistent.
    #[error("invalid range: {0}")]
    InvalidRange(#[from] RangeError),

    /// The buffer is shorter than the structures it declares.
    #[error("truncated data: required at least {required} bytes, got {actual}")]
    TruncatedData { required: u64, actual: u64 },

    /// A mip-level table entry disagrees with the layout computed from the
    /// header. The format carries no checksum, so divergence is treated as
    /// corruption.
    #[error("inconsistent metadata at mip level {mip_level}: {reason}")]
    InconsistentMetadata {
        mip_level: u32,
        reason: &'static str,
    },
}

impl From<ReadOutOfRange> for TextureLoadError {
    fn from(err: ReadOutOfRange) -> Self {
        TextureLoadError::TruncatedData {
            required: err.offset as u64 + err.size as u64,
            actual: err.length as u64,
        }
    }
}
