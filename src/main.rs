//! items-rs server binary
//!
//! Item record service with an asynchronous batch processor

#![allow(missing_docs)]

use clap::Parser;
use items_rs::server;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line options
#[derive(Debug, Parser)]
#[command(name = "items-server", version, about = "Item record service")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "ITEMS_CONFIG", default_value = "config/items.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is not an error
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match server::builder::run_server(&cli.config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
