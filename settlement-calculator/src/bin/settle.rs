//! Settlement calculator command-line entry point
//!
//! Reads a JSON array of `{name, deposited, current}` records from a file or
//! stdin and prints the transfers that settle the group.

use anyhow::Context;
use clap::Parser;
use settlement_calculator::{parse_participants_json, Config, SettlementEngine};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Compute peer-to-peer transfers that zero out every participant's balance.
#[derive(Parser, Debug)]
#[command(name = "settle", version, about)]
struct Cli {
    /// Participant file (JSON array); reads stdin when omitted
    input: Option<PathBuf>,

    /// TOML configuration file (falls back to SETTLEMENT_CONFIG, then env)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let engine = SettlementEngine::new(load_config(cli.config)?);
    let config = engine.config();
    tracing::debug!(
        service = %config.service_name,
        version = %config.service_version,
        placeholder = %config.labels.placeholder_prefix,
        "Configuration loaded"
    );

    let document = read_input(cli.input.as_ref())?;
    let participants = parse_participants_json(&document)?;

    let report = engine.run(&participants);

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        for line in engine.render(&report) {
            println!("{}", line);
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let path = path.or_else(|| std::env::var_os("SETTLEMENT_CONFIG").map(PathBuf::from));

    let config = match path {
        Some(path) => Config::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::from_env()?,
    };
    Ok(config)
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}
