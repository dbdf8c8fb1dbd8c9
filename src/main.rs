use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use fireplan::api;
use fireplan::core::{CalculationRequest, run_calculation};

#[derive(Parser, Debug)]
#[command(name = "fireplan", about = "Household tax, mortgage, and net-worth projections")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API.
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Run one calculation from a request file and print the response.
    Calculate {
        /// Path to a calculation request in JSON form.
        #[arg(long)]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();
    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port } => {
            api::run_http_server(port).await.context("HTTP server failed")?;
        }
        Command::Calculate { input } => {
            let raw = fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let request: CalculationRequest = serde_json::from_str(&raw)
                .with_context(|| format!("invalid calculation request in {}", input.display()))?;
            let response = run_calculation(&request);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

fn init_logger() {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME"))),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
