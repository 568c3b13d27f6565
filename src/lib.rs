//! Solscout - Solana Balance Reporter
//!
//! Generates a throwaway keypair and reports its devnet balance.
//!
//! # Modules
//!
//! - `ports`: Trait abstractions (BalanceSource) and recording mocks
//! - `adapters`: External implementations (Solana RPC, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: The balance reporter flow

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
