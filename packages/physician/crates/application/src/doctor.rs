use domain::check::{Check, DiagnosticResult, FixOutcome};
use domain::report::{Report, ReportEntry};
use std::sync::Arc;

/// Outcome of one remediation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixStatus {
    /// The consent-gated command ran.
    Fixed,
    /// Instructions for a repair that must be done by hand.
    Manual(String),
    /// The user declined the offered repair.
    Skipped,
    /// The remediation itself failed.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixReport {
    pub name: String,
    pub status: FixStatus,
}

/// Batch runner. Registered checks are diagnosed in registration order
/// and failing ones offered a fix, one at a time.
#[derive(Default)]
pub struct Doctor {
    checks: Vec<Arc<dyn Check>>,
}

impl Doctor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, check: Arc<dyn Check>) {
        self.checks.push(check);
    }

    pub fn register_all(&mut self, checks: impl IntoIterator<Item = Arc<dyn Check>>) {
        self.checks.extend(checks);
    }

    /// Diagnose every registered check. A crashing check becomes a
    /// failing entry; the rest of the batch still runs.
    pub async fn diagnose(&self) -> Report {
        let mut entries = Vec::with_capacity(self.checks.len());
        for check in &self.checks {
            let result = Self::diagnose_one(Arc::clone(check)).await;
            entries.push(ReportEntry::new(Arc::clone(check), result));
        }
        Report::new(entries)
    }

    async fn diagnose_one(check: Arc<dyn Check>) -> DiagnosticResult {
        let name = check.name();
        tracing::debug!("diagnosing {}", name);
        match tokio::spawn(async move { check.diagnose().await }).await {
            Ok(result) => result,
            Err(_) => DiagnosticResult::fail(format!("{} diagnosis crashed unexpectedly!", name)),
        }
    }

    /// Attempt remediation for every failing entry of `report`, in
    /// report order. A skipped fix never prevents attempting the rest.
    pub async fn fix(&self, report: &Report) -> Vec<FixReport> {
        let mut outcomes = Vec::new();
        for entry in report.failing() {
            let status = match entry.check().fix().await {
                Ok(FixOutcome::Applied) => FixStatus::Fixed,
                Ok(FixOutcome::Manual(instructions)) => FixStatus::Manual(instructions),
                Err(err) if err.is_skipped() => FixStatus::Skipped,
                Err(err) => FixStatus::Failed(err.to_string()),
            };
            outcomes.push(FixReport {
                name: entry.name(),
                status,
            });
        }
        outcomes
    }

    /// Diagnose, then drive fixes for whatever failed.
    pub async fn run(&self) -> (Report, Vec<FixReport>) {
        let report = self.diagnose().await;
        let fixes = self.fix(&report).await;
        (report, fixes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use domain::error::{ExecError, FixError};
    use pretty_assertions::assert_eq;

    enum FixScript {
        Manual(&'static str),
        Applied,
        Skipped,
        Broken,
    }

    struct TestCheck {
        name: &'static str,
        healthy: bool,
        fix: FixScript,
    }

    #[async_trait]
    impl Check for TestCheck {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn autofix(&self) -> bool {
            matches!(self.fix, FixScript::Applied | FixScript::Skipped | FixScript::Broken)
        }

        async fn diagnose(&self) -> DiagnosticResult {
            if self.healthy {
                DiagnosticResult::pass(format!("{} looks good", self.name))
            } else {
                DiagnosticResult::fail(format!("{} is broken", self.name))
            }
        }

        async fn fix(&self) -> Result<FixOutcome, FixError> {
            match self.fix {
                FixScript::Manual(instructions) => Ok(FixOutcome::Manual(instructions.to_string())),
                FixScript::Applied => Ok(FixOutcome::Applied),
                FixScript::Skipped => Err(FixError::Skipped),
                FixScript::Broken => Err(FixError::from(ExecError::Failed {
                    command: "repair".into(),
                    stderr: "kaput".into(),
                })),
            }
        }
    }

    struct PanickyCheck;

    #[async_trait]
    impl Check for PanickyCheck {
        fn name(&self) -> String {
            "panicky".to_string()
        }

        async fn diagnose(&self) -> DiagnosticResult {
            panic!("probe exploded");
        }

        async fn fix(&self) -> Result<FixOutcome, FixError> {
            Ok(FixOutcome::Applied)
        }
    }

    #[tokio::test]
    async fn report_keeps_registration_order() {
        let mut doctor = Doctor::new();
        doctor.register(Arc::new(TestCheck {
            name: "alpha",
            healthy: true,
            fix: FixScript::Manual("sort alpha"),
        }));
        doctor.register(Arc::new(TestCheck {
            name: "beta",
            healthy: false,
            fix: FixScript::Manual("sort beta"),
        }));
        doctor.register(Arc::new(TestCheck {
            name: "gamma",
            healthy: true,
            fix: FixScript::Manual("sort gamma"),
        }));

        let report = doctor.diagnose().await;
        let names: Vec<String> = report.iter().map(|entry| entry.name()).collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
        assert_eq!(report.failed(), 1);
    }

    #[tokio::test]
    async fn a_crashing_check_does_not_halt_the_batch() {
        let mut doctor = Doctor::new();
        doctor.register(Arc::new(PanickyCheck));
        doctor.register(Arc::new(TestCheck {
            name: "after",
            healthy: true,
            fix: FixScript::Manual("n/a"),
        }));

        let report = doctor.diagnose().await;
        assert_eq!(report.len(), 2);

        let entries: Vec<&ReportEntry> = report.iter().collect();
        assert!(!entries[0].ok());
        assert_eq!(
            entries[0].result().message,
            "panicky diagnosis crashed unexpectedly!"
        );
        assert!(entries[1].ok());
    }

    #[tokio::test]
    async fn fix_records_one_outcome_per_failing_check() {
        let mut doctor = Doctor::new();
        doctor.register(Arc::new(TestCheck {
            name: "fine",
            healthy: true,
            fix: FixScript::Manual("n/a"),
        }));
        doctor.register(Arc::new(TestCheck {
            name: "manual",
            healthy: false,
            fix: FixScript::Manual("Manually sort it out."),
        }));
        doctor.register(Arc::new(TestCheck {
            name: "declined",
            healthy: false,
            fix: FixScript::Skipped,
        }));
        doctor.register(Arc::new(TestCheck {
            name: "repaired",
            healthy: false,
            fix: FixScript::Applied,
        }));
        doctor.register(Arc::new(TestCheck {
            name: "hopeless",
            healthy: false,
            fix: FixScript::Broken,
        }));

        let (report, fixes) = doctor.run().await;
        assert_eq!(report.failed(), 4);
        assert_eq!(
            fixes,
            vec![
                FixReport {
                    name: "manual".to_string(),
                    status: FixStatus::Manual("Manually sort it out.".to_string()),
                },
                FixReport {
                    name: "declined".to_string(),
                    status: FixStatus::Skipped,
                },
                FixReport {
                    name: "repaired".to_string(),
                    status: FixStatus::Fixed,
                },
                FixReport {
                    name: "hopeless".to_string(),
                    status: FixStatus::Failed(
                        "'repair' exited with a non-zero status: kaput".to_string()
                    ),
                },
            ]
        );
    }

    #[tokio::test]
    async fn healthy_runs_attempt_no_fixes() {
        let mut doctor = Doctor::new();
        doctor.register(Arc::new(TestCheck {
            name: "fine",
            healthy: true,
            fix: FixScript::Applied,
        }));

        let (report, fixes) = doctor.run().await;
        assert!(report.is_healthy());
        assert!(fixes.is_empty());
    }
}
