mod commands;

pub use commands::{BalanceCmd, CliApp, Command, ReportCmd};
