use crate::error::FixError;
use async_trait::async_trait;
use serde::Serialize;

/// Outcome of probing one environment precondition. `ok` is the single
/// source of truth; the message is user-facing either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticResult {
    pub ok: bool,
    pub message: String,
}

impl DiagnosticResult {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// What a successful `fix` call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixOutcome {
    /// A consent-gated command ran to completion.
    Applied,
    /// No automatic repair exists; instructions for doing it by hand.
    Manual(String),
}

/// One diagnosable precondition of the host environment.
#[async_trait]
pub trait Check: Send + Sync {
    /// Human name of the target this check covers (a path, a binary,
    /// a product name).
    fn name(&self) -> String;

    /// Whether a consent-gated automatic repair is available.
    fn autofix(&self) -> bool {
        false
    }

    /// Probe the environment. Expected negatives and collaborator
    /// failures both surface as `ok: false` results, never as errors.
    async fn diagnose(&self) -> DiagnosticResult;

    /// Attempt remediation for a failing diagnosis. Autofix checks ask
    /// for consent first and fail with `FixError::Skipped` when it is
    /// withheld.
    async fn fix(&self) -> Result<FixOutcome, FixError>;
}
