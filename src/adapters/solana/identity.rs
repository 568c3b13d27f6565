use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};

/// A fresh in-memory identity: one Ed25519 keypair.
///
/// Never written to disk; the secret key lives only as long as the process.
pub struct Identity {
    keypair: Keypair,
}

impl Identity {
    /// Generate a new random keypair
    pub fn generate() -> Self {
        Self {
            keypair: Keypair::new(),
        }
    }

    /// Get the public key as Pubkey
    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Get the public key as a base58 string
    pub fn address(&self) -> String {
        self.keypair.pubkey().to_string()
    }
}
