//! usuarios server binary
//!
//! In-memory user CRUD HTTP service.
//!
//! # Usage
//!
//! ```bash
//! # With config file
//! usuarios --config config.yaml
//!
//! # With environment variables only
//! USUARIOS_SERVER__PORT=9090 usuarios
//! ```

use std::net::SocketAddr;

use clap::Parser;
use tokio::signal;
use tracing::{info, Level};

use usuarios_api::http::{create_router, AppState};
use usuarios_api::observability::{init_logging, LoggingConfig};
use usuarios_api::ServerConfig;
use usuarios_storage::MemoryUserStore;

/// usuarios - in-memory user CRUD service
#[derive(Parser, Debug)]
#[command(name = "usuarios")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = if let Some(config_path) = args.config {
        ServerConfig::load(&config_path)?
    } else {
        ServerConfig::from_env()?
    };

    // Initialize logging
    let log_config = LoggingConfig {
        json_format: config.logging.json,
        default_level: parse_log_level(&config.logging.level),
    };
    init_logging(log_config);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting usuarios server");

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // The store lives for the whole process and is dropped on exit; nothing
    // is persisted.
    let storage = MemoryUserStore::new_shared();
    let state = AppState::new(storage);
    let router = create_router(state);

    info!(%addr, "HTTP server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

/// Parse log level from string.
fn parse_log_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("trace"), Level::TRACE);
        assert_eq!(parse_log_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_log_level("Info"), Level::INFO);
        assert_eq!(parse_log_level("WARN"), Level::WARN);
        assert_eq!(parse_log_level("error"), Level::ERROR);
        assert_eq!(parse_log_level("unknown"), Level::INFO);
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = Args::try_parse_from(["usuarios"]).unwrap();
        assert!(args.config.is_none());

        let args = Args::try_parse_from(["usuarios", "--config", "config.yaml"]).unwrap();
        assert_eq!(args.config, Some("config.yaml".to_string()));

        let args = Args::try_parse_from(["usuarios", "-c", "test.yaml"]).unwrap();
        assert_eq!(args.config, Some("test.yaml".to_string()));
    }
}
