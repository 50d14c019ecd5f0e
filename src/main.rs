//! roast-gateway - photo roast HTTP service

#![allow(missing_docs)]

use clap::Parser;
use roast_gateway::config::{Config, DEFAULT_CONFIG_PATH};
use roast_gateway::server;
use roast_gateway::utils::{bootstrap_logging, init_logging};
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line options; each overrides the file and environment
#[derive(Debug, Parser)]
#[command(name = "roast-gateway", version, about = "Photo roast HTTP service")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "ROAST_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Bind host
    #[arg(long)]
    host: Option<String>,

    /// Bind port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    // Startup logs go through a scoped subscriber until the configured one
    // is installed
    let startup = bootstrap_logging();
    let loaded = match Config::load(&cli.config).await {
        Ok(mut config) => config.apply_cli(cli.host, cli.port).map(|()| config),
        Err(e) => Err(e),
    };
    drop(startup);

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.logging.level, config.logging.json);

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps multi-line messages readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
