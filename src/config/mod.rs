//! Configuration Loader
//!
//! Loads and validates configuration from TOML files; every field has a
//! built-in default so the tool runs without any config file at all.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// Default RPC endpoint, same one the original client was pointed at
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub solana: SolanaSection,
}

/// Solana RPC configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SolanaSection {
    /// RPC endpoint
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// Commitment level: "processed", "confirmed", "finalized"
    #[serde(default = "default_commitment")]
    pub commitment: String,
    /// Program id carried over from the original template; accepted and
    /// validated but referenced by no operation.
    #[serde(default)]
    pub program_id: Option<String>,
}

impl Default for SolanaSection {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            commitment: default_commitment(),
            program_id: None,
        }
    }
}

fn default_rpc_url() -> String {
    DEVNET_RPC_URL.to_string()
}

fn default_commitment() -> String {
    "confirmed".to_string()
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.solana.rpc_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "rpc_url cannot be empty".to_string(),
            ));
        }

        self.solana.commitment_config()?;

        if let Some(ref id) = self.solana.program_id {
            Pubkey::from_str(id).map_err(|e| {
                ConfigError::ValidationError(format!(
                    "program_id is not a valid public key: {}",
                    e
                ))
            })?;
        }

        Ok(())
    }
}

impl SolanaSection {
    /// Get RPC URL with environment variable override
    /// Checks SOLANA_RPC_URL env var first, falls back to config value
    pub fn get_rpc_url(&self) -> String {
        std::env::var("SOLANA_RPC_URL").unwrap_or_else(|_| self.rpc_url.clone())
    }

    /// Parse the configured commitment level
    pub fn commitment_config(&self) -> Result<CommitmentConfig, ConfigError> {
        match self.commitment.as_str() {
            "processed" => Ok(CommitmentConfig::processed()),
            "confirmed" => Ok(CommitmentConfig::confirmed()),
            "finalized" => Ok(CommitmentConfig::finalized()),
            other => Err(ConfigError::ValidationError(format!(
                "commitment must be processed/confirmed/finalized, got {}",
                other
            ))),
        }
    }
}
