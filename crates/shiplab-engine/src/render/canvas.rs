use crate::assets::Texture;
use crate::coords::Vec2;

/// One sprite draw: texture placed at `position`, rotated by `angle`, scaled to `size`.
#[derive(Debug, Copy, Clone)]
pub struct SpriteCmd<'a> {
    pub texture: &'a Texture,
    pub position: Vec2,
    pub angle: f32,
    pub size: Vec2,
}

/// Renderer-facing context for one frame.
///
/// The lifecycle controller brackets each frame with exactly one `begin` and
/// one `end`; scenes and entities issue `draw` calls in between. Backends
/// decide how draws are batched and rasterized.
pub trait Canvas {
    fn begin(&mut self);

    fn draw(&mut self, cmd: &SpriteCmd<'_>);

    fn end(&mut self);
}
