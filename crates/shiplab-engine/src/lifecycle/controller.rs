use crate::assets::{AssetRegistry, AssetSource};
use crate::audio::{AudioGate, AudioSink};
use crate::core::{App, AppControl};
use crate::render::Canvas;
use crate::scene::{GameScene, LoadingScene};
use crate::time::FrameTime;

use super::config::AppConfig;
use super::state::{AppState, LifecycleEvent};

/// Host-provided collaborators.
///
/// `create_canvas` and `create_source` are called exactly once, at startup.
pub trait Backend {
    type Canvas: Canvas;

    fn create_canvas(&mut self) -> Self::Canvas;

    fn create_source(&mut self) -> Box<dyn AssetSource>;

    fn audio(&mut self) -> &mut dyn AudioSink;
}

/// Which phase controller is active.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PhaseKind {
    Loading,
    Gameplay,
}

enum Phase {
    Loading(LoadingScene),
    Gameplay(GameScene),
}

impl Phase {
    fn kind(&self) -> PhaseKind {
        match self {
            Phase::Loading(_) => PhaseKind::Loading,
            Phase::Gameplay(_) => PhaseKind::Gameplay,
        }
    }

    fn dispose(&mut self) {
        match self {
            Phase::Loading(scene) => scene.dispose(),
            Phase::Gameplay(scene) => scene.dispose(),
        }
    }
}

/// Application root.
///
/// Owns the shared canvas and asset registry from startup to shutdown, holds
/// exactly one active phase in between, and forwards each frame to it. The
/// loading phase hands over to gameplay once, the first time it reports
/// completion.
///
/// The controller has no recovery path of its own: if the loading phase never
/// completes, the application stays in [`AppState::Loading`] until shutdown.
pub struct LifecycleController<B: Backend> {
    config: AppConfig,
    backend: B,
    state: AppState,
    loaded: bool,
    canvas: Option<B::Canvas>,
    assets: Option<AssetRegistry>,
    phase: Option<Phase>,
    audio: AudioGate,
}

impl<B: Backend> LifecycleController<B> {
    /// Creates an unstarted controller. Nothing is allocated until startup.
    pub fn new(config: AppConfig, backend: B) -> Self {
        Self {
            config,
            backend,
            state: AppState::Unstarted,
            loaded: false,
            canvas: None,
            assets: None,
            phase: None,
            audio: AudioGate::default(),
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> AppState {
        self.state
    }

    /// True once the loading → gameplay handover has happened.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn phase_kind(&self) -> Option<PhaseKind> {
        self.phase.as_ref().map(Phase::kind)
    }

    pub fn loading(&self) -> Option<&LoadingScene> {
        match &self.phase {
            Some(Phase::Loading(scene)) => Some(scene),
            _ => None,
        }
    }

    pub fn game(&self) -> Option<&GameScene> {
        match &self.phase {
            Some(Phase::Gameplay(scene)) => Some(scene),
            _ => None,
        }
    }

    pub fn game_mut(&mut self) -> Option<&mut GameScene> {
        match &mut self.phase {
            Some(Phase::Gameplay(scene)) => Some(scene),
            _ => None,
        }
    }

    pub fn canvas(&self) -> Option<&B::Canvas> {
        self.canvas.as_ref()
    }

    pub fn assets(&self) -> Option<&AssetRegistry> {
        self.assets.as_ref()
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    // ── transitions ───────────────────────────────────────────────────────

    fn apply(&mut self, event: LifecycleEvent) -> bool {
        match self.state.on(event, self.loaded) {
            Some(next) => {
                log::info!("lifecycle: {:?} -> {:?} ({:?})", self.state, next, event);
                self.state = next;
                true
            }
            None => {
                log::warn!("lifecycle: ignoring {:?} in {:?}", event, self.state);
                false
            }
        }
    }

    /// Allocates the shared canvas and registry and enters the loading phase.
    pub fn startup(&mut self) {
        if !self.apply(LifecycleEvent::Startup) {
            return;
        }

        let canvas = self.backend.create_canvas();
        let mut assets = AssetRegistry::new(self.backend.create_source());

        for key in self.config.startup_keys() {
            assets.load_now(key);
        }
        for key in self.config.manifest_keys() {
            assets.request(key);
        }

        let loading = LoadingScene::new(&self.config.loading, &assets);

        self.canvas = Some(canvas);
        self.assets = Some(assets);
        self.phase = Some(Phase::Loading(loading));
        self.loaded = false;
    }

    /// Forwards `delta` to the active phase; hands over to gameplay when loading completes.
    pub fn step(&mut self, delta: f32) {
        match self.state {
            AppState::Loading => {
                let (Some(Phase::Loading(loading)), Some(assets)) =
                    (self.phase.as_mut(), self.assets.as_mut())
                else {
                    return;
                };

                loading.update(delta, assets);
                if loading.is_complete() {
                    self.finish_loading();
                }
            }
            AppState::Running => {
                if let Some(Phase::Gameplay(game)) = self.phase.as_mut() {
                    game.update(delta);
                }
            }
            AppState::Unstarted | AppState::Suspended | AppState::Shutdown => {}
        }
    }

    fn finish_loading(&mut self) {
        if self.assets.is_none() || !self.apply(LifecycleEvent::LoadingComplete) {
            return;
        }
        let Some(assets) = self.assets.as_ref() else {
            return;
        };

        let game = GameScene::new(&self.config.world, assets);
        if let Some(mut previous) = self.phase.replace(Phase::Gameplay(game)) {
            previous.dispose();
        }
        self.loaded = true;
    }

    /// Renders the active phase inside one canvas bracket.
    pub fn render(&mut self) {
        if !self.state.is_live() {
            return;
        }
        let Some(canvas) = self.canvas.as_mut() else {
            return;
        };

        canvas.begin();
        match &self.phase {
            Some(Phase::Loading(scene)) => scene.draw(canvas),
            Some(Phase::Gameplay(scene)) => scene.draw(canvas),
            None => {}
        }
        canvas.end();
    }

    /// Backgrounds the application. Audio stops; nothing is torn down.
    pub fn suspend(&mut self) {
        if !self.apply(LifecycleEvent::Suspend) {
            return;
        }
        self.audio.suspend(self.backend.audio());
    }

    /// Returns to the phase that was active at suspension and restarts audio.
    pub fn resume(&mut self) {
        if !self.apply(LifecycleEvent::Resume) {
            return;
        }
        self.audio.resume(self.backend.audio());
    }

    /// Disposes the active phase and releases the shared canvas and registry.
    pub fn shutdown(&mut self) {
        if !self.apply(LifecycleEvent::Shutdown) {
            return;
        }

        if let Some(mut phase) = self.phase.take() {
            phase.dispose();
        }
        if let Some(mut assets) = self.assets.take() {
            assets.clear();
        }
        self.canvas = None;
    }
}

impl<B: Backend> App for LifecycleController<B> {
    fn on_startup(&mut self) {
        self.startup();
    }

    fn on_suspend(&mut self) {
        self.suspend();
    }

    fn on_resume(&mut self) {
        self.resume();
    }

    fn on_shutdown(&mut self) {
        self.shutdown();
    }

    fn update(&mut self, time: FrameTime) {
        self.step(time.dt);
    }

    fn draw(&mut self) {
        self.render();
    }

    fn on_frame(&mut self, time: FrameTime) -> AppControl {
        if self.state.is_terminal() {
            return AppControl::Exit;
        }
        self.step(time.dt);
        self.render();
        AppControl::Continue
    }
}
