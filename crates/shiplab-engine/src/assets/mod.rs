//! Asset registry.
//!
//! Responsibilities:
//! - hand out shared renderable handles by key
//! - load requested assets incrementally, a bounded number per frame
//! - answer the readiness query the loading screen polls
//!
//! Decoding and I/O belong to an [`AssetSource`] supplied by the host.

mod registry;
mod texture;

pub use registry::{AssetRegistry, AssetSource, LoadStatus};
pub use texture::{Texture, TextureHandle};
