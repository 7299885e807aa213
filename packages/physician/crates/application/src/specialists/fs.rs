use crate::confirm::FixConfirmer;
use async_trait::async_trait;
use domain::check::{Check, DiagnosticResult, FixOutcome};
use domain::error::FixError;
use domain::ports::fs::PathProbe;
use domain::ports::process::ProcessRunner;
use std::path::PathBuf;
use std::sync::Arc;

/// Verifies a directory is present at a fixed path.
pub struct DirCheck {
    path: PathBuf,
    probe: Arc<dyn PathProbe>,
}

impl DirCheck {
    pub fn new(path: impl Into<PathBuf>, probe: Arc<dyn PathProbe>) -> Self {
        Self {
            path: path.into(),
            probe,
        }
    }
}

#[async_trait]
impl Check for DirCheck {
    fn name(&self) -> String {
        format!("directory {}", self.path.display())
    }

    async fn diagnose(&self) -> DiagnosticResult {
        if !self.probe.exists(&self.path) {
            return DiagnosticResult::fail(format!(
                "Could NOT find directory at '{}'!",
                self.path.display()
            ));
        }
        match self.probe.is_directory(&self.path) {
            Ok(true) => {
                DiagnosticResult::pass(format!("Found directory at: {}", self.path.display()))
            }
            Ok(false) => {
                DiagnosticResult::fail(format!("'{}' is NOT a directory!", self.path.display()))
            }
            Err(err) => DiagnosticResult::fail(err.to_string()),
        }
    }

    async fn fix(&self) -> Result<FixOutcome, FixError> {
        Ok(FixOutcome::Manual(format!(
            "Manually create a directory at: {}",
            self.path.display()
        )))
    }
}

/// Verifies a file is present, offering to `touch` it when missing.
pub struct FileCheck {
    path: PathBuf,
    probe: Arc<dyn PathProbe>,
    runner: Arc<dyn ProcessRunner>,
    confirmer: Arc<FixConfirmer>,
}

impl FileCheck {
    pub fn new(
        path: impl Into<PathBuf>,
        probe: Arc<dyn PathProbe>,
        runner: Arc<dyn ProcessRunner>,
        confirmer: Arc<FixConfirmer>,
    ) -> Self {
        Self {
            path: path.into(),
            probe,
            runner,
            confirmer,
        }
    }
}

#[async_trait]
impl Check for FileCheck {
    fn name(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn autofix(&self) -> bool {
        true
    }

    async fn diagnose(&self) -> DiagnosticResult {
        if self.probe.exists(&self.path) {
            DiagnosticResult::pass(format!("Found file at: {}", self.path.display()))
        } else {
            DiagnosticResult::fail(format!("Could NOT find file at '{}'!", self.path.display()))
        }
    }

    async fn fix(&self) -> Result<FixOutcome, FixError> {
        let target = self.path.display().to_string();
        let description = format!("The following command need be executed: touch '{}'", target);
        let skip_notice = format!("Skipping you will need to touch '{}' manually.", target);
        let runner = Arc::clone(&self.runner);

        self.confirmer
            .confirm(&description, &skip_notice, move || async move {
                runner.exec("touch", &[target.as_str()]).await?;
                Ok(())
            })
            .await?;
        Ok(FixOutcome::Applied)
    }
}
