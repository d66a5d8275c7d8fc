//! Logging utilities.
//!
//! Library code only uses the `log` facade; this module wires up the
//! `env_logger` backend for hosts and tests that want one.

mod init;

pub use init::{init_logging, LoggingConfig};
