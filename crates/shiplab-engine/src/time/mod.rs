//! Time subsystem.
//!
//! Frame timing without coupling to the runtime:
//! - one `FrameClock` per loop
//! - call `tick()` once per frame to obtain `FrameTime`
//! - call `reset()` after a suspension so the first resumed frame is not huge

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
