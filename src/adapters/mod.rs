pub mod cli;
pub mod solana;
