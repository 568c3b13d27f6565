mod identity;
mod rpc;

pub use identity::Identity;
pub use rpc::{SolanaClient, SolanaClientError};
