use crate::check::{Check, DiagnosticResult};
use serde::Serialize;
use std::sync::Arc;

/// One diagnosed check.
#[derive(Clone)]
pub struct ReportEntry {
    check: Arc<dyn Check>,
    result: DiagnosticResult,
}

impl ReportEntry {
    pub fn new(check: Arc<dyn Check>, result: DiagnosticResult) -> Self {
        Self { check, result }
    }

    pub fn name(&self) -> String {
        self.check.name()
    }

    pub fn autofix(&self) -> bool {
        self.check.autofix()
    }

    pub fn check(&self) -> &Arc<dyn Check> {
        &self.check
    }

    pub fn result(&self) -> &DiagnosticResult {
        &self.result
    }

    pub fn ok(&self) -> bool {
        self.result.ok
    }
}

/// Outcome of one diagnosis pass, in registration order. Immutable
/// once built.
#[derive(Clone, Default)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new(entries: Vec<ReportEntry>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose diagnosis came back `ok: false`, in report order.
    pub fn failing(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|entry| !entry.ok())
    }

    pub fn passed(&self) -> usize {
        self.entries.iter().filter(|entry| entry.ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.entries.len() - self.passed()
    }

    pub fn is_healthy(&self) -> bool {
        self.failed() == 0
    }

    /// Serializable summary of the whole pass.
    pub fn view(&self) -> ReportView {
        ReportView {
            healthy: self.is_healthy(),
            passed: self.passed(),
            failed: self.failed(),
            checks: self
                .entries
                .iter()
                .map(|entry| ReportEntryView {
                    name: entry.name(),
                    ok: entry.ok(),
                    message: entry.result().message.clone(),
                    autofix: entry.autofix(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportView {
    pub healthy: bool,
    pub passed: usize,
    pub failed: usize,
    pub checks: Vec<ReportEntryView>,
}

#[derive(Debug, Serialize)]
pub struct ReportEntryView {
    pub name: String,
    pub ok: bool,
    pub message: String,
    pub autofix: bool,
}
