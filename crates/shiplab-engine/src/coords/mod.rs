//! Coordinate types shared by entities, scenes and canvases.
//!
//! World space:
//! - world units (not pixels; the canvas decides the mapping)
//! - +X right, +Y up
//! - angles in radians, counter-clockwise from +X

mod vec2;

pub use vec2::Vec2;
