use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;

use super::{BalanceSource, BalanceSourceError};

/// Mock balance source that records calls and allows controlled responses.
///
/// Addresses with no configured balance read as 0, like unfunded accounts
/// on the real ledger.
#[derive(Debug, Default, Clone)]
pub struct MockBalanceSource {
    calls: Arc<Mutex<Vec<String>>>,
    balances: Arc<Mutex<HashMap<String, u64>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl MockBalanceSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the balance for a given address
    pub fn with_balance(self, address: &str, lamports: u64) -> Self {
        self.balances
            .lock()
            .unwrap()
            .insert(address.to_string(), lamports);
        self
    }

    /// Builder method to make every query fail with the given message
    pub fn with_failure(self, message: &str) -> Self {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self
    }

    /// Get all recorded calls
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BalanceSource for MockBalanceSource {
    async fn lamport_balance(&self, pubkey: &Pubkey) -> Result<u64, BalanceSourceError> {
        let address = pubkey.to_string();
        self.calls.lock().unwrap().push(address.clone());

        if let Some(ref message) = *self.failure.lock().unwrap() {
            return Err(BalanceSourceError::RpcError(message.clone()));
        }

        Ok(self
            .balances
            .lock()
            .unwrap()
            .get(&address)
            .copied()
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::{Keypair, Signer};

    #[tokio::test]
    async fn test_configured_balance() {
        let pubkey = Keypair::new().pubkey();
        let mock = MockBalanceSource::new().with_balance(&pubkey.to_string(), 42);

        let balance = mock.lamport_balance(&pubkey).await.unwrap();
        assert_eq!(balance, 42);
        assert_eq!(mock.get_calls(), vec![pubkey.to_string()]);
    }

    #[tokio::test]
    async fn test_unknown_address_reads_zero() {
        let mock = MockBalanceSource::new();
        let balance = mock.lamport_balance(&Keypair::new().pubkey()).await.unwrap();
        assert_eq!(balance, 0);
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let mock = MockBalanceSource::new().with_failure("connection refused");
        let result = mock.lamport_balance(&Keypair::new().pubkey()).await;
        assert!(matches!(result, Err(BalanceSourceError::RpcError(_))));
    }
}
