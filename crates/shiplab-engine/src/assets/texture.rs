use std::rc::Rc;

use crate::coords::Vec2;

/// Opaque visual content produced by an [`AssetSource`](super::AssetSource).
///
/// The engine only needs a key for diagnostics and the natural extent; pixel
/// data stays with the rendering backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    key: String,
    width: u32,
    height: u32,
}

impl Texture {
    pub fn new(key: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
        }
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Natural extent as a vector.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Shared renderable handle.
///
/// Held by the registry and by every entity drawing the texture; the content
/// is released when the last holder drops it.
pub type TextureHandle = Rc<Texture>;
