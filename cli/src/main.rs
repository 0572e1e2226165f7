//! HBnB CLI server
//!
//! ```sh
//! # Run with default config (~/.config/hbnb/config.toml)
//! hbnb-service
//!
//! # Custom config path
//! hbnb-service --config /etc/hbnb/config.toml
//!
//! # Override the listen address
//! hbnb-service --host 127.0.0.1 --port 8080
//!
//! # Validate config without starting
//! hbnb-service --check
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use hbnb::config::AppConfig;
use hbnb::server::{init_tracing, ServerHandle, ServerOptions};

/// HBnB: users, places, amenities and reviews over a REST API.
#[derive(Parser, Debug)]
#[command(
    name = "hbnb-service",
    version,
    about = "REST API server for the HBnB rental domain",
    long_about = "HBnB REST API server. All data is kept in memory and lost on exit.\n\n\
                  Default config: ~/.config/hbnb/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "HBNB_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen host.
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(hbnb::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return Ok(ExitCode::FAILURE);
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.server.address());
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        return Ok(ExitCode::SUCCESS);
    }

    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        repositories: None,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully.");

    handle.wait().await;
    Ok(ExitCode::SUCCESS)
}
