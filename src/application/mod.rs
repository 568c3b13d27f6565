mod reporter;

pub use reporter::{lamports_to_sol, BalanceReporter, Report, ReportError};
