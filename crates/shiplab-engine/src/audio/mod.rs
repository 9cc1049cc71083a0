//! Audio lifecycle seam.
//!
//! Playback lives in an external audio subsystem. The engine's only contract
//! with it is "pause on suspend, resume on resume".

mod gate;

pub use gate::AudioGate;

/// Pause/resume entry points of the host's audio subsystem.
pub trait AudioSink {
    /// Stops all output. Must leave nothing playing in the background.
    fn pause_all(&mut self);

    /// Resumes whatever `pause_all` stopped.
    fn resume_all(&mut self);
}
