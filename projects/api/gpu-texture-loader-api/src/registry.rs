//! First-match selection across registered container loaders.

use alloc::vec::Vec;

use crate::error::{TextureLoadError, TextureLoadResult};
use crate::loaded::LoadedTexture;
use crate::traits::TextureContainerLoader;

/// An ordered set of container loaders probed in registration order.
///
/// Selection is first-match: the first loader whose
/// [`can_load`](TextureContainerLoader::can_load) accepts the buffer wins.
/// Register more specific loaders before permissive ones.
#[derive(Default)]
pub struct LoaderRegistry<'l> {
    loaders: Vec<&'l dyn TextureContainerLoader>,
}

impl<'l> LoaderRegistry<'l> {
    pub fn new() -> Self {
        Self {
            loaders: Vec::new(),
        }
    }

    pub fn register(&mut self, loader: &'l dyn TextureContainerLoader) {
        self.loaders.push(loader);
    }

    /// The first registered loader whose structural gate accepts `data`.
    pub fn loader_for(&self, data: &[u8]) -> Option<&'l dyn TextureContainerLoader> {
        self.loaders
            .iter()
            .copied()
            .find(|loader| loader.can_load(data).is_ok())
    }

    /// Registered loaders claiming `extension` (lowercase, without dot).
    ///
    /// An empty extension list on a loader means it claims every
    /// extension.
    pub fn loaders_for_extension<'s>(
        &'s self,
        extension: &'s str,
    ) -> impl Iterator<Item = &'l dyn TextureContainerLoader> + 's {
        let extension = extension.trim_start_matches('.');
        self.loaders.iter().copied().filter(move |loader| {
            let extensions = loader.supported_extensions();
            extensions.is_empty() || extensions.iter().any(|e| e.eq_ignore_ascii_case(extension))
        })
    }

    /// Resolves `data` with the first loader that recognizes it.
    pub fn load<'a>(&self, data: &'a [u8]) -> TextureLoadResult<LoadedTexture<'a>> {
        match self.loader_for(data) {
            Some(loader) => loader.load(data),
            None => Err(TextureLoadError::UnsupportedFeature {
                reason: "no registered loader recognizes this data",
            }),
        }
    }
}
