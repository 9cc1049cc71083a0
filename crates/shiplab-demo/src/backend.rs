use std::collections::HashMap;

use anyhow::Result;

use shiplab_engine::assets::{AssetSource, Texture};
use shiplab_engine::audio::AudioSink;
use shiplab_engine::lifecycle::Backend;
use shiplab_engine::render::{Canvas, SpriteCmd};

/// Canvas that reports frames through the log instead of rasterizing.
#[derive(Default)]
pub struct TraceCanvas {
    frame: u64,
    draws: usize,
}

impl Canvas for TraceCanvas {
    fn begin(&mut self) {
        self.draws = 0;
    }

    fn draw(&mut self, cmd: &SpriteCmd<'_>) {
        self.draws += 1;
        let extent = cmd.texture.size();
        log::trace!(
            "draw '{}' at ({:.2}, {:.2}) angle={:.2} extent=({:.1}, {:.1})",
            cmd.texture.key(),
            cmd.position.x,
            cmd.position.y,
            cmd.angle,
            extent.x * cmd.size.x,
            extent.y * cmd.size.y,
        );
    }

    fn end(&mut self) {
        if self.frame % 120 == 0 {
            log::debug!("frame {}: {} sprites", self.frame, self.draws);
        }
        self.frame += 1;
    }
}

/// Produces placeholder textures, each after `latency` polls.
///
/// Keys in `instant` load on the first attempt; the loading screen needs them
/// before it can show anything.
pub struct SyntheticSource {
    latency: u32,
    instant: Vec<String>,
    waited: HashMap<String, u32>,
}

impl AssetSource for SyntheticSource {
    fn load(&mut self, key: &str) -> Result<Option<Texture>> {
        if self.instant.iter().any(|k| k == key) {
            return Ok(Some(Texture::new(key, 64, 8)));
        }
        let waited = self.waited.entry(key.to_string()).or_insert(0);
        if *waited < self.latency {
            *waited += 1;
            return Ok(None);
        }
        Ok(Some(Texture::new(key, 64, 64)))
    }
}

/// Audio sink that only logs; playback is out of the demo's reach.
#[derive(Default)]
pub struct ConsoleAudio;

impl AudioSink for ConsoleAudio {
    fn pause_all(&mut self) {
        log::info!("audio: paused");
    }

    fn resume_all(&mut self) {
        log::info!("audio: resumed");
    }
}

pub struct DemoBackend {
    latency: u32,
    instant: Vec<String>,
    audio: ConsoleAudio,
}

impl DemoBackend {
    pub fn new(latency: u32, instant: Vec<String>) -> Self {
        Self {
            latency,
            instant,
            audio: ConsoleAudio,
        }
    }
}

impl Backend for DemoBackend {
    type Canvas = TraceCanvas;

    fn create_canvas(&mut self) -> TraceCanvas {
        TraceCanvas::default()
    }

    fn create_source(&mut self) -> Box<dyn AssetSource> {
        Box::new(SyntheticSource {
            latency: self.latency,
            instant: self.instant.clone(),
            waited: HashMap::new(),
        })
    }

    fn audio(&mut self) -> &mut dyn AudioSink {
        &mut self.audio
    }
}
