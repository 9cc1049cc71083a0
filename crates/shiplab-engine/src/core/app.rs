use crate::time::FrameTime;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by the host runtime.
///
/// The runtime calls these from a single thread. Lifecycle callbacks are never
/// interleaved with `update`/`draw`, and within a frame `update` completes
/// before `draw` starts.
pub trait App {
    /// Called once, after the platform is ready and before the first frame.
    fn on_startup(&mut self);

    /// Called when the application is sent to the background.
    fn on_suspend(&mut self) {}

    /// Called when the application returns to the foreground.
    fn on_resume(&mut self) {}

    /// Called once when the application is about to quit.
    fn on_shutdown(&mut self);

    /// Advances application state by `time.dt` seconds.
    fn update(&mut self, time: FrameTime);

    /// Renders the current state.
    fn draw(&mut self);

    /// Called once per frame by the runtime.
    fn on_frame(&mut self, time: FrameTime) -> AppControl {
        self.update(time);
        self.draw();
        AppControl::Continue
    }
}
