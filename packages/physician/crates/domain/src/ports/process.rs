use crate::error::ExecError;
use async_trait::async_trait;

/// Captured output of a completed command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Executes external commands on behalf of checks and fixes.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `command` with `args` and capture its output. A non-zero
    /// exit status is an `ExecError::Failed`.
    async fn exec(&self, command: &str, args: &[&str]) -> Result<ExecOutput, ExecError>;
}
