//! # ar-observability
//!
//! Logging infrastructure for Asset Register.
//!
//! Structured logging is built on the tracing ecosystem. Binaries call
//! [`init_logging`] or [`logging::init_logging_with_config`] once at startup.

pub mod logging;

pub use logging::{init_logging, LoggingConfig};
