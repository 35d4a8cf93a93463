//! Logging utilities.
//!
//! The engine itself only talks to the `log` facade; this module wires up
//! `env_logger` for binaries that want output.

mod init;

pub use init::{init_logging, LoggingConfig};
