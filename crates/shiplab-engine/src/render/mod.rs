//! Rendering context.
//!
//! The engine never rasterizes. Scenes and entities describe sprites through
//! the [`Canvas`] trait; a backend supplied by the host turns them into pixels.
//!
//! Convention:
//! - positions and sizes are in world units
//! - one `begin`/`end` bracket per frame

mod canvas;
mod recording;

pub use canvas::{Canvas, SpriteCmd};
pub use recording::{DrawItem, Frame, RecordingCanvas};
