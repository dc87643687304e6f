// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Allow println! in main.rs for CLI user-facing output (validate command)
#![allow(clippy::print_stdout)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::path::{Path, PathBuf};

use item_catalog_server::config::{load_config_file, ServerConfig};
use item_catalog_server::CatalogServer;

#[derive(Parser)]
#[command(name = "item-catalog-server")]
#[command(about = "Item catalog HTTP API with Swagger UI, ReDoc and Scalar documentation")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nrustc: ",
    env!("CATALOG_RUSTC_VERSION"),
    "\ndocs renderer: ",
    env!("CATALOG_DOCS_RENDERER"),
))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the configuration file (built-in defaults when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the bind host
    #[arg(long, global = true)]
    host: Option<String>,

    /// Override the server port
    #[arg(short, long, global = true)]
    port: Option<u16>,

    /// Override the log level (error, warn, info, debug, trace, off)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the server (default if no subcommand specified)
    Run,

    /// Validate a configuration file without starting the server
    Validate {
        /// Path to the configuration file to validate (defaults to --config)
        file: Option<PathBuf>,
    },
}

const DEFAULT_CONFIG_PATH: &str = "config/server.yaml";

impl Cli {
    /// File checked by `validate`: the positional path, then `--config`.
    fn validate_target(&self) -> PathBuf {
        match &self.command {
            Some(Commands::Validate { file: Some(file) }) => file.clone(),
            _ => self
                .config
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Validate { .. }) => validate_config(&cli.validate_target()),
        Some(Commands::Run) | None => run_server(&cli).await,
    }
}

/// Run the item catalog server
async fn run_server(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => load_config_file(path)?,
        None => ServerConfig::default(),
    };

    if let Some(host) = &cli.host {
        config.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    config.validate()?;

    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .format_timestamp_millis()
        .init();

    info!("Starting item catalog server");
    if let Some(path) = &cli.config {
        info!("Config file: {}", path.display());
    }
    debug!("Server configuration: {config:?}");

    CatalogServer::new(config).run().await
}

/// Validate a configuration file
fn validate_config(path: &Path) -> Result<()> {
    println!("Validating configuration: {}", path.display());
    println!();

    match load_config_file(path) {
        Ok(config) => {
            println!("[OK] Configuration file is valid");
            println!();
            println!("Summary:");
            println!("  Bind address: {}", config.bind_address());
            println!("  Log level: {}", config.log_level);
            println!("  Scalar title: {}", config.docs.scalar_title);
            println!(
                "  Scalar theme: {}",
                config.docs.scalar_theme.value().unwrap_or("(unset)")
            );
            Ok(())
        }
        Err(e) => {
            println!("[ERROR] {e}");
            std::process::exit(1);
        }
    }
}
