pub mod check;
pub mod error;
pub mod ports;
pub mod report;
pub mod testkit;

pub use check::{Check, DiagnosticResult, FixOutcome};
pub use error::{ExecError, FixError, ProbeError};
pub use report::{Report, ReportEntry};
