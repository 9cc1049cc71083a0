//! Logging utilities.
//!
//! Centralizes logger initialization. Engine code only talks to the `log`
//! facade; the `env_logger` backend is installed by the host binary.

mod init;

pub use init::{LoggingConfig, init_logging};
