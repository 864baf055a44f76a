//! Capability traits for texture container loading.
//!
//! Two seams make the system pluggable:
//!
//! - [`TextureContainerLoader`] is implemented once per container format
//!   (KTX2, ...). A cheap [`can_load`](TextureContainerLoader::can_load)
//!   gate inspects only the fixed header so a registry can probe many
//!   loaders before committing to full layout resolution.
//! - [`TextureSink`] is implemented by whatever owns the GPU texture the
//!   resolved mip data is uploaded into. This crate performs no GPU work;
//!   the sink is the boundary.

pub(crate) mod container_loader;
pub(crate) mod texture_sink;

// Re-export the main traits for convenience
pub use container_loader::*;
pub use texture_sink::*;
