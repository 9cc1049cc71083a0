//! Phase controllers.
//!
//! The application is always in exactly one phase: the loading screen while
//! the manifest streams in, then gameplay. Both follow the same per-frame
//! contract (`update(delta)` then `draw(canvas)`) and are torn down with
//! `dispose`.

mod game;
mod loading;

pub use game::{GameScene, GuardSpawn, PropSpawn, WorldConfig};
pub use loading::{LoadingConfig, LoadingScene};
