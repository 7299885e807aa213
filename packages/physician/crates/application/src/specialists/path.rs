use async_trait::async_trait;
use domain::check::{Check, DiagnosticResult, FixOutcome};
use domain::error::FixError;
use domain::ports::fs::PathProbe;
use domain::ports::process::ProcessRunner;
use std::path::Path;
use std::sync::Arc;

fn lookup_command() -> &'static str {
    if cfg!(windows) {
        "where.exe"
    } else {
        "which"
    }
}

/// Verifies a binary resolves through the system PATH. The lookup runs
/// `which` (or `where.exe`) and the first reported location must
/// actually exist.
pub struct BinaryCheck {
    binary: String,
    runner: Arc<dyn ProcessRunner>,
    probe: Arc<dyn PathProbe>,
}

impl BinaryCheck {
    pub fn new(
        binary: impl Into<String>,
        runner: Arc<dyn ProcessRunner>,
        probe: Arc<dyn PathProbe>,
    ) -> Self {
        Self {
            binary: binary.into(),
            runner,
            probe,
        }
    }
}

#[async_trait]
impl Check for BinaryCheck {
    fn name(&self) -> String {
        self.binary.clone()
    }

    async fn diagnose(&self) -> DiagnosticResult {
        let missing = format!("{} is MISSING in PATH!", self.binary);

        let output = match self.runner.exec(lookup_command(), &[self.binary.as_str()]).await {
            Ok(output) => output,
            Err(_) => return DiagnosticResult::fail(missing),
        };
        if output.stdout.to_lowercase().contains("not found") {
            return DiagnosticResult::fail(missing);
        }

        // `where.exe` may report several hits; the first one wins.
        let resolved = output.stdout.lines().next().unwrap_or_default().trim();
        if self.probe.exists(Path::new(resolved)) {
            DiagnosticResult::pass(format!("{} was found at {}", self.binary, resolved))
        } else {
            DiagnosticResult::fail(format!(
                "{} was found in PATH at '{}', but this is NOT a valid path!",
                self.binary, resolved
            ))
        }
    }

    async fn fix(&self) -> Result<FixOutcome, FixError> {
        Ok(FixOutcome::Manual(format!(
            "Manually install the {} binary and add it to PATH.",
            self.binary
        )))
    }
}
