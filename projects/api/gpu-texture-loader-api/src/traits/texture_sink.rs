//! Trait for the GPU-side texture a loaded container uploads into.

use gpu_texture_loader_common::range::TextureRangeDesc;

/// Destination for resolved mip-level data.
///
/// The sink owns all GPU interaction and all failure reporting for it;
/// [`upload`](Self::upload) has no error channel here because every byte
/// range handed to it was validated during load. Sinks that can fail
/// surface that through their own result mechanism.
pub trait TextureSink {
    /// The full subresource range covering `mip_level` of this texture.
    fn full_range_for_level(&self, mip_level: u32) -> TextureRangeDesc;

    /// Uploads `data` into `range` of this texture.
    fn upload(&mut self, range: TextureRangeDesc, data: &[u8]);
}
