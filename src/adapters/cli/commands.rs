//! CLI Command Definitions
//!
//! Argument parsing for the solscout balance reporter.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Solscout - Solana Balance Reporter
#[derive(Parser, Debug)]
#[command(
    name = "solscout",
    version = env!("CARGO_PKG_VERSION"),
    about = "Solana balance reporter",
    long_about = "Generates a throwaway keypair and reports its devnet balance, or \
                  queries the balance of an existing address."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a fresh keypair and report its address and balance
    Report(ReportCmd),

    /// Report the balance of an existing address
    Balance(BalanceCmd),
}

/// Generate a fresh keypair and report its balance
#[derive(Parser, Debug)]
pub struct ReportCmd {
    /// Path to configuration file (built-in devnet defaults when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override RPC URL
    #[arg(long, value_name = "URL")]
    pub rpc_url: Option<String>,
}

/// Report the balance of an existing address
#[derive(Parser, Debug)]
pub struct BalanceCmd {
    /// Base58-encoded account address
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Path to configuration file (built-in devnet defaults when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override RPC URL
    #[arg(long, value_name = "URL")]
    pub rpc_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_app_parse_report() {
        let args = vec!["solscout", "report"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Report(cmd) => {
                assert!(cmd.config.is_none());
                assert!(cmd.rpc_url.is_none());
            }
            _ => panic!("Expected Report command"),
        }
    }

    #[test]
    fn test_cli_app_parse_report_with_config() {
        let args = vec!["solscout", "report", "--config", "config/devnet.toml"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Report(cmd) => {
                assert_eq!(cmd.config, Some(PathBuf::from("config/devnet.toml")));
            }
            _ => panic!("Expected Report command"),
        }
    }

    #[test]
    fn test_cli_app_parse_report_with_rpc_override() {
        let args = vec!["solscout", "report", "--rpc-url", "http://localhost:8899"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Report(cmd) => {
                assert_eq!(cmd.rpc_url, Some("http://localhost:8899".to_string()));
            }
            _ => panic!("Expected Report command"),
        }
    }

    #[test]
    fn test_cli_app_parse_balance() {
        let args = vec![
            "solscout",
            "balance",
            "9uReBEtnYGYf1oUe4KGSt6kQhsqGE74i17NzRNEDLutn",
        ];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Balance(cmd) => {
                assert_eq!(cmd.address, "9uReBEtnYGYf1oUe4KGSt6kQhsqGE74i17NzRNEDLutn");
                assert!(cmd.rpc_url.is_none());
            }
            _ => panic!("Expected Balance command"),
        }
    }

    #[test]
    fn test_cli_app_parse_balance_requires_address() {
        let args = vec!["solscout", "balance"];
        assert!(CliApp::try_parse_from(args).is_err());
    }

    #[test]
    fn test_global_flags() {
        let args = vec!["solscout", "-v", "--debug", "report"];
        let app = CliApp::try_parse_from(args).unwrap();

        assert!(app.verbose);
        assert!(app.debug);
    }
}
