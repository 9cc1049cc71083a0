use crate::assets::{AssetRegistry, TextureHandle};
use crate::coords::Vec2;
use crate::render::{Canvas, SpriteCmd};

/// Loading-screen settings.
#[derive(Debug, Clone)]
pub struct LoadingConfig {
    /// Texture stretched horizontally to show progress. Loaded before the scene starts.
    pub bar_texture: String,
    pub bar_position: Vec2,
    /// Bar scale at 100% progress.
    pub bar_size: Vec2,
    /// Manifest entries resolved per update at most.
    pub loads_per_frame: usize,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            bar_texture: "progress".to_string(),
            bar_position: Vec2::ZERO,
            bar_size: Vec2::new(8.0, 0.5),
            loads_per_frame: 4,
        }
    }
}

/// Loading phase: drives the asset registry until the manifest is resolved.
///
/// Completion is sampled at the end of each `update`; it never reverts once
/// reported.
#[derive(Debug)]
pub struct LoadingScene {
    bar: Option<TextureHandle>,
    bar_position: Vec2,
    bar_size: Vec2,
    loads_per_frame: usize,
    progress: f32,
    elapsed: f32,
    complete: bool,
    active: bool,
}

impl LoadingScene {
    pub fn new(config: &LoadingConfig, assets: &AssetRegistry) -> Self {
        let bar = assets.get(&config.bar_texture);
        if bar.is_none() {
            log::warn!(
                "loading bar texture '{}' unavailable; progress will not be drawn",
                config.bar_texture
            );
        }

        Self {
            bar,
            bar_position: config.bar_position,
            bar_size: config.bar_size,
            loads_per_frame: config.loads_per_frame.max(1),
            progress: 0.0,
            elapsed: 0.0,
            complete: false,
            active: true,
        }
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn update(&mut self, delta: f32, assets: &mut AssetRegistry) {
        if !self.active || self.complete {
            return;
        }

        self.elapsed += delta;
        assets.poll(self.loads_per_frame);
        self.progress = assets.progress();

        if assets.is_complete() {
            self.complete = true;
            log::info!("{} assets resolved after {:.2}s", assets.len(), self.elapsed);
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if !self.active {
            return;
        }
        let Some(texture) = self.bar.as_deref() else {
            return;
        };
        canvas.draw(&SpriteCmd {
            texture,
            position: self.bar_position,
            angle: 0.0,
            size: Vec2::new(self.bar_size.x * self.progress, self.bar_size.y),
        });
    }

    /// Releases the bar texture. Idempotent.
    pub fn dispose(&mut self) {
        self.bar = None;
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetSource, Texture};
    use crate::render::RecordingCanvas;
    use anyhow::Result;

    struct Immediate;

    impl AssetSource for Immediate {
        fn load(&mut self, key: &str) -> Result<Option<Texture>> {
            Ok(Some(Texture::new(key, 1, 1)))
        }
    }

    fn setup(manifest: &[&str]) -> (LoadingScene, AssetRegistry) {
        let mut assets = AssetRegistry::new(Box::new(Immediate));
        assets.load_now("progress");
        for key in manifest {
            assets.request(*key);
        }
        let config = LoadingConfig {
            loads_per_frame: 1,
            ..LoadingConfig::default()
        };
        (LoadingScene::new(&config, &assets), assets)
    }

    #[test]
    fn completes_after_manifest_resolves() {
        let (mut scene, mut assets) = setup(&["a", "b"]);
        scene.update(0.1, &mut assets);
        assert!(!scene.is_complete());
        scene.update(0.1, &mut assets);
        assert!(scene.is_complete());
        assert_eq!(scene.progress(), 1.0);
    }

    #[test]
    fn bar_scales_with_progress() {
        let (mut scene, mut assets) = setup(&["a", "b", "c"]);
        scene.update(0.1, &mut assets);
        // The bar itself counts as one resolved entry: 2 of 4.
        let mut canvas = RecordingCanvas::new();
        canvas.begin();
        scene.draw(&mut canvas);
        canvas.end();
        let item = &canvas.last_frame().unwrap().items[0];
        assert_eq!(item.texture, "progress");
        assert_eq!(item.size.x, LoadingConfig::default().bar_size.x * 0.5);
    }

    #[test]
    fn disposed_scene_is_inert() {
        let (mut scene, mut assets) = setup(&["a"]);
        scene.dispose();
        scene.dispose();
        scene.update(0.1, &mut assets);
        assert!(!scene.is_complete());
        assert!(!assets.is_complete());

        let mut canvas = RecordingCanvas::new();
        canvas.begin();
        scene.draw(&mut canvas);
        canvas.end();
        assert_eq!(canvas.draw_count(), 0);
    }
}
