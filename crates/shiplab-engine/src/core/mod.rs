//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the host runtime (the
//! platform loop) and the application root. The runtime translates platform
//! events into these calls; the application never sees the platform.

mod app;

pub use app::{App, AppControl};
