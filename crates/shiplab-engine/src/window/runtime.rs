use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl};
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Frame pacing. `None` redraws as fast as the platform allows.
    pub target_fps: Option<u32>,
}

impl RuntimeConfig {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.initial_size = LogicalSize::new(width, height);
        self
    }

    pub fn fps(mut self, fps: u32) -> Self {
        self.target_fps = (fps > 0).then_some(fps);
        self
    }

    fn frame_interval(&self) -> Option<Duration> {
        self.target_fps.map(|fps| Duration::from_secs_f64(1.0 / f64::from(fps)))
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "shiplab".to_string(),
            initial_size: LogicalSize::new(1024.0, 576.0),
            target_fps: Some(60),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs `app` until the window closes or the app asks to exit.
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut host = Host::new(config, app);

        event_loop
            .run_app(&mut host)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

/// Platform event → lifecycle call translation.
///
/// The first `resumed` starts the app; later ones resume it. winit delivers
/// every callback on the loop thread, so lifecycle calls never overlap a frame.
struct Host<A: App> {
    config: RuntimeConfig,
    app: A,
    window: Option<Window>,
    clock: FrameClock,
    started: bool,
    suspended: bool,
    exit_requested: bool,
    next_frame: Instant,
}

impl<A: App> Host<A> {
    fn new(config: RuntimeConfig, app: A) -> Self {
        Self {
            config,
            app,
            window: None,
            clock: FrameClock::default(),
            started: false,
            suspended: false,
            exit_requested: false,
            next_frame: Instant::now(),
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        window.request_redraw();
        self.window = Some(window);
        Ok(())
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        if self.suspended || !self.started {
            return;
        }

        let ft = self.clock.tick();
        log::trace!("frame {} dt={:.4}", ft.frame_index, ft.dt);

        if self.app.on_frame(ft) == AppControl::Exit {
            self.request_exit(event_loop);
        }
    }
}

impl<A: App> ApplicationHandler for Host<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.create_window(event_loop) {
                log::error!("failed to create initial window: {e:#}");
                self.request_exit(event_loop);
                return;
            }
        }

        if !self.started {
            self.started = true;
            self.app.on_startup();
        } else if self.suspended {
            self.app.on_resume();
        }

        self.suspended = false;
        self.clock.reset();
        self.next_frame = Instant::now();
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        if !self.started || self.suspended {
            return;
        }
        self.suspended = true;
        self.app.on_suspend();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if self.suspended {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }

        match self.config.frame_interval() {
            Some(interval) => {
                let now = Instant::now();
                if now >= self.next_frame {
                    self.next_frame = now + interval;
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
                event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
            }
            None => {
                event_loop.set_control_flow(ControlFlow::Poll);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => self.request_exit(event_loop),
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if self.started {
            self.app.on_shutdown();
        }
        self.window = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paces_at_sixty() {
        let interval = RuntimeConfig::default().frame_interval().unwrap();
        assert_eq!(interval, Duration::from_secs_f64(1.0 / 60.0));
    }

    #[test]
    fn zero_fps_means_unpaced() {
        assert!(RuntimeConfig::default().fps(0).frame_interval().is_none());
    }

    #[test]
    fn builder_sets_title_and_size() {
        let config = RuntimeConfig::default().title("lab").size(320.0, 240.0);
        assert_eq!(config.title, "lab");
        assert_eq!(config.initial_size, LogicalSize::new(320.0, 240.0));
    }
}
