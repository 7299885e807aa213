//! Recording test doubles for the collaborator ports. Shipped as a
//! regular module so downstream crates can drive checks in their own
//! tests.

use crate::error::{ExecError, ProbeError};
use crate::ports::console::{Answer, Console, Prompter};
use crate::ports::env::EnvProbe;
use crate::ports::fs::PathProbe;
use crate::ports::node::NodeLocator;
use crate::ports::process::{ExecOutput, ProcessRunner};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Scripted process runner: responses are handed out in push order and
/// every invocation is recorded.
#[derive(Default, Clone)]
pub struct FakeProcessRunner {
    responses: Arc<Mutex<VecDeque<Result<ExecOutput, ExecError>>>>,
    calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
}

impl FakeProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful execution with the given stdout.
    pub fn push_stdout(&self, stdout: &str) {
        self.responses.lock().unwrap().push_back(Ok(ExecOutput {
            stdout: stdout.to_string(),
            stderr: String::new(),
        }));
    }

    /// Queue a non-zero exit.
    pub fn push_failure(&self, stderr: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(ExecError::Failed {
                command: "scripted".to_string(),
                stderr: stderr.to_string(),
            }));
    }

    /// Queue a spawn error (command not present on the host).
    pub fn push_spawn_error(&self) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(ExecError::Spawn {
                command: "scripted".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "scripted spawn error"),
            }));
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ProcessRunner for FakeProcessRunner {
    async fn exec(&self, command: &str, args: &[&str]) -> Result<ExecOutput, ExecError> {
        self.calls.lock().unwrap().push((
            command.to_string(),
            args.iter().map(|arg| arg.to_string()).collect(),
        ));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ExecError::Spawn {
                    command: command.to_string(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "no scripted response",
                    ),
                })
            })
    }
}

/// In-memory filesystem: paths registered as files or directories,
/// optionally with contents.
#[derive(Default, Clone)]
pub struct FakePathProbe {
    entries: Arc<Mutex<HashMap<PathBuf, bool>>>,
    contents: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl FakePathProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_file(&self, path: impl Into<PathBuf>) {
        self.entries.lock().unwrap().insert(path.into(), false);
    }

    pub fn set_dir(&self, path: impl Into<PathBuf>) {
        self.entries.lock().unwrap().insert(path.into(), true);
    }

    /// Register a file along with its contents.
    pub fn set_content(&self, path: impl Into<PathBuf>, content: &str) {
        let path = path.into();
        self.entries.lock().unwrap().insert(path.clone(), false);
        self.contents
            .lock()
            .unwrap()
            .insert(path, content.to_string());
    }
}

impl PathProbe for FakePathProbe {
    fn exists(&self, path: &Path) -> bool {
        self.entries.lock().unwrap().contains_key(path)
    }

    fn is_directory(&self, path: &Path) -> Result<bool, ProbeError> {
        self.entries
            .lock()
            .unwrap()
            .get(path)
            .copied()
            .ok_or_else(|| ProbeError::Stat {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such entry"),
            })
    }

    fn read_to_string(&self, path: &Path) -> Result<String, ProbeError> {
        self.contents
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| ProbeError::Read {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such entry"),
            })
    }
}

/// In-memory environment.
#[derive(Default, Clone)]
pub struct FakeEnvProbe {
    vars: Arc<Mutex<HashMap<String, String>>>,
}

impl FakeEnvProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, name: &str, value: &str) {
        self.vars
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
    }
}

impl EnvProbe for FakeEnvProbe {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.lock().unwrap().get(name).cloned()
    }
}

/// Scripted yes/no prompter: answers are handed out in push order and
/// default to `No` once exhausted. Every prompt is recorded.
#[derive(Default, Clone)]
pub struct ScriptedPrompter {
    answers: Arc<Mutex<VecDeque<Answer>>>,
    asked: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_answer(&self, answer: Answer) {
        self.answers.lock().unwrap().push_back(answer);
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn ask(&self, message: &str) -> Answer {
        self.asked.lock().unwrap().push(message.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Answer::No)
    }
}

/// Console that captures every notice.
#[derive(Default, Clone)]
pub struct RecordingConsole {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Console for RecordingConsole {
    fn info(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Node locator with a fixed answer.
#[derive(Default, Clone)]
pub struct FakeNodeLocator {
    path: Arc<Mutex<Option<PathBuf>>>,
}

impl FakeNodeLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, path: impl Into<PathBuf>) {
        *self.path.lock().unwrap() = Some(path.into());
    }
}

#[async_trait]
impl NodeLocator for FakeNodeLocator {
    async fn detect(&self) -> Option<PathBuf> {
        self.path.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn runner_replays_responses_in_order_and_records_calls() {
        let runner = FakeProcessRunner::new();
        runner.push_stdout("first");
        runner.push_failure("boom");

        let first = runner.exec("which", &["mvn"]).await.unwrap();
        assert_eq!(first.stdout, "first");
        assert!(runner.exec("which", &["ant"]).await.is_err());
        // Exhausted queues degrade into spawn errors.
        assert!(runner.exec("which", &["adb"]).await.is_err());

        assert_eq!(
            runner.calls(),
            vec![
                ("which".to_string(), vec!["mvn".to_string()]),
                ("which".to_string(), vec!["ant".to_string()]),
                ("which".to_string(), vec!["adb".to_string()]),
            ]
        );
    }

    #[tokio::test]
    async fn prompter_defaults_to_no_when_exhausted() {
        let prompter = ScriptedPrompter::new();
        prompter.push_answer(Answer::Yes);

        assert_eq!(prompter.ask("Fix it?").await, Answer::Yes);
        assert_eq!(prompter.ask("Fix it?").await, Answer::No);
        assert_eq!(prompter.asked().len(), 2);
    }

    #[test]
    fn probe_distinguishes_files_and_directories() {
        let probe = FakePathProbe::new();
        probe.set_dir("/a/b");
        probe.set_content("/a/b/c", "hello");

        assert!(probe.exists(Path::new("/a/b")));
        assert!(probe.is_directory(Path::new("/a/b")).unwrap());
        assert!(!probe.is_directory(Path::new("/a/b/c")).unwrap());
        assert!(probe.is_directory(Path::new("/missing")).is_err());
        assert_eq!(probe.read_to_string(Path::new("/a/b/c")).unwrap(), "hello");
    }
}
