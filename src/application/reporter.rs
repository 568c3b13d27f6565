//! Balance Reporter
//!
//! The whole program: generate an identity, print its address, query the
//! balance, print it in SOL.

use std::io::Write;

use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

use crate::adapters::solana::Identity;
use crate::ports::{BalanceSource, BalanceSourceError};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Balance query failed: {0}")]
    Balance(#[from] BalanceSourceError),
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of a completed report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub address: String,
    pub lamports: u64,
}

/// Runs the report flow against any balance source
pub struct BalanceReporter<S: BalanceSource> {
    source: S,
}

impl<S: BalanceSource> BalanceReporter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Generate a fresh identity and report its address and balance.
    ///
    /// A new keypair is unfunded, so the reported balance is 0 unless the
    /// endpoint has been seeded (e.g. a local validator with an airdrop).
    pub async fn report_fresh<W: Write>(&self, out: &mut W) -> Result<Report, ReportError> {
        let identity = Identity::generate();
        tracing::debug!(address = %identity.address(), "generated identity");
        self.report_for(out, &identity.pubkey()).await
    }

    /// Report the address and balance of an existing account.
    pub async fn report_for<W: Write>(
        &self,
        out: &mut W,
        pubkey: &Pubkey,
    ) -> Result<Report, ReportError> {
        let address = pubkey.to_string();
        writeln!(out, "My address: {}", address)?;

        // Address first, then the awaited query: a transport failure leaves
        // the address line as the only output.
        let lamports = self.source.lamport_balance(pubkey).await?;
        writeln!(out, "My balance: {} SOL", lamports_to_sol(lamports))?;

        tracing::info!(%address, lamports, "balance reported");
        Ok(Report { address, lamports })
    }
}

/// Convert lamports to SOL, the display unit of the report
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}
