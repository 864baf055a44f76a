#![no_main]

// Feeds arbitrary bytes through the KTX2 loader. Malformed input must be
// rejected with an ordinary error; any accepted input must resolve to
// in-bounds, idempotent mip ranges.

use gpu_texture_loader_api::traits::TextureContainerLoader;
use gpu_texture_loader_ktx2::Ktx2Loader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(texture) = Ktx2Loader.load(data) else {
        return;
    };

    for range in texture.mip_ranges() {
        let end = range
            .byte_offset
            .checked_add(range.byte_length)
            .expect("mip range overflows");
        assert!(end <= data.len(), "mip range reads out of bounds");
    }

    // Loading is a pure function of the buffer.
    let again = Ktx2Loader.load(data).expect("second load must succeed");
    assert_eq!(texture.mip_ranges(), again.mip_ranges());
    assert_eq!(texture.range(), again.range());
    assert_eq!(
        texture.should_generate_mipmaps(),
        again.should_generate_mipmaps()
    );
});
