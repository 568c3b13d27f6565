//! Solscout - Solana Balance Reporter
//!
//! Generates a throwaway keypair and reports its devnet balance.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use solana_sdk::pubkey::Pubkey;
use tracing_subscriber::{fmt, EnvFilter};

use solscout::adapters::cli::{BalanceCmd, CliApp, Command, ReportCmd};
use solscout::adapters::solana::SolanaClient;
use solscout::application::BalanceReporter;
use solscout::config::{load_config, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (endpoint overrides go here)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();
    init_logging(app.verbose, app.debug)?;

    match app.command {
        Command::Report(cmd) => report_command(cmd).await,
        Command::Balance(cmd) => balance_command(cmd).await,
    }
}

fn init_logging(verbose: bool, debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };

    fmt().with_env_filter(filter).with_target(false).init();
    Ok(())
}

/// Build the RPC client from config file, env, and CLI override
fn build_client(config_path: Option<&Path>, rpc_override: Option<String>) -> Result<SolanaClient> {
    let config = match config_path {
        Some(path) => load_config(path).context("Failed to load configuration")?,
        None => Config::default(),
    };

    let commitment = config.solana.commitment_config()?;
    let rpc_url = rpc_override.unwrap_or_else(|| config.solana.get_rpc_url());
    tracing::info!(%rpc_url, "connecting to RPC endpoint");

    Ok(SolanaClient::with_commitment(rpc_url, commitment))
}

async fn report_command(cmd: ReportCmd) -> Result<()> {
    let client = build_client(cmd.config.as_deref(), cmd.rpc_url)?;
    let reporter = BalanceReporter::new(client);

    let mut stdout = std::io::stdout();
    reporter
        .report_fresh(&mut stdout)
        .await
        .context("Failed to query balance")?;

    Ok(())
}

async fn balance_command(cmd: BalanceCmd) -> Result<()> {
    let pubkey = Pubkey::from_str(&cmd.address)
        .with_context(|| format!("Invalid address: {}", cmd.address))?;

    let client = build_client(cmd.config.as_deref(), cmd.rpc_url)?;
    let reporter = BalanceReporter::new(client);

    let mut stdout = std::io::stdout();
    reporter
        .report_for(&mut stdout, &pubkey)
        .await
        .context("Failed to query balance")?;

    Ok(())
}
