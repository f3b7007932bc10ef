//! usuarios-api: HTTP API layer
//!
//! This crate provides the HTTP surface of the usuarios service:
//! - REST endpoints via Axum
//! - Configuration management
//! - Structured logging setup
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               usuarios-api                   │
//! ├─────────────────────────────────────────────┤
//! │  http/          - REST endpoints            │
//! │  config.rs      - Configuration management  │
//! │  observability/ - Logging setup             │
//! └─────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod http;
pub mod observability;

pub use config::{ConfigLoadError, ServerConfig};
