//! Application lifecycle.
//!
//! A deterministic state machine fed by host events:
//!
//! ```text
//! Unstarted -> Loading -> Running <-> Suspended -> Shutdown
//! ```
//!
//! [`AppState::on`] is the pure transition function; [`LifecycleController`]
//! owns the collaborators and performs the side effects of each transition.

mod config;
mod controller;
mod state;

pub use config::AppConfig;
pub use controller::{Backend, LifecycleController, PhaseKind};
pub use state::{AppState, LifecycleEvent};
