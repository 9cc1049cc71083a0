mod backend;

use anyhow::Result;

use shiplab_engine::lifecycle::{AppConfig, LifecycleController};
use shiplab_engine::logging::{LoggingConfig, init_logging};
use shiplab_engine::window::{Runtime, RuntimeConfig};

use backend::DemoBackend;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = AppConfig::default()
        .with_loads_per_frame(1)
        .with_manifest_entry("music")
        .with_manifest_entry("hud");

    let instant = config.startup_keys().map(str::to_string).collect();
    // Each streamed asset takes a few frames so the loading phase is visible.
    let backend = DemoBackend::new(12, instant);
    let app = LifecycleController::new(config, backend);

    Runtime::run(RuntimeConfig::default().title("Ship Lab").size(960.0, 540.0), app)
}
