//! Port traits consumed by the application layer.

pub mod mocks;

use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// Balance source error type
#[derive(Debug, Error)]
pub enum BalanceSourceError {
    #[error("RPC request failed: {0}")]
    RpcError(String),
}

/// Read-only view of account balances on the ledger.
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Lamport balance of the account, at the source's commitment level.
    async fn lamport_balance(&self, pubkey: &Pubkey) -> Result<u64, BalanceSourceError>;
}
