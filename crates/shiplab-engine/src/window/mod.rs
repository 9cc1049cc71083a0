//! Window + runtime loop.
//!
//! Owns the `winit` event loop and window and translates platform events into
//! [`core::App`](crate::core::App) lifecycle calls.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
