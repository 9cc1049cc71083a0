//! Shiplab engine crate.
//!
//! The application skeleton: a lifecycle controller that drives the frame
//! loop, mediates between the loading and gameplay phases, and the entity
//! abstraction everything in gameplay is built on. Rasterization, asset
//! decoding and audio playback are supplied by the host through traits.

pub mod assets;
pub mod audio;
pub mod coords;
pub mod core;
pub mod entity;
pub mod lifecycle;
pub mod logging;
pub mod render;
pub mod scene;
pub mod time;
pub mod window;
