use crate::coords::Vec2;

use super::canvas::{Canvas, SpriteCmd};

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub texture: String,
    pub position: Vec2,
    pub angle: f32,
    pub size: Vec2,
}

/// Draw calls recorded between one `begin`/`end` pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub items: Vec<DrawItem>,
}

/// Canvas that records draw calls instead of rasterizing them.
///
/// Used as the stub backend in tests and for headless diagnostics. Bracket
/// misuse is counted rather than panicking so tests can assert on it.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    frames: Vec<Frame>,
    open: Option<Frame>,
    begins: usize,
    ends: usize,
    violations: usize,
}

impl RecordingCanvas {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed frames in submission order.
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    #[inline]
    pub fn begins(&self) -> usize {
        self.begins
    }

    #[inline]
    pub fn ends(&self) -> usize {
        self.ends
    }

    /// Draws outside a bracket, nested `begin`s and unmatched `end`s.
    #[inline]
    pub fn violations(&self) -> usize {
        self.violations
    }

    /// Total draw calls across completed frames.
    pub fn draw_count(&self) -> usize {
        self.frames.iter().map(|f| f.items.len()).sum()
    }

    /// Forgets recorded frames. Counters are kept.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn begin(&mut self) {
        self.begins += 1;
        if self.open.is_some() {
            self.violations += 1;
        }
        self.open = Some(Frame::default());
    }

    fn draw(&mut self, cmd: &SpriteCmd<'_>) {
        let Some(frame) = self.open.as_mut() else {
            self.violations += 1;
            return;
        };
        frame.items.push(DrawItem {
            texture: cmd.texture.key().to_string(),
            position: cmd.position,
            angle: cmd.angle,
            size: cmd.size,
        });
    }

    fn end(&mut self) {
        self.ends += 1;
        match self.open.take() {
            Some(frame) => self.frames.push(frame),
            None => self.violations += 1,
        }
    }
}
