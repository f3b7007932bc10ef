//! Observability infrastructure.
//!
//! Currently structured logging configuration only.

mod logging;

pub use logging::{init_logging, LoggingConfig};
