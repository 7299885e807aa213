use async_trait::async_trait;
use domain::ports::console::{Answer, Console, Prompter};
use tokio::task::spawn_blocking;

/// cliclack-backed notice sink.
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn info(&self, message: &str) {
        let _ = cliclack::log::info(message);
    }
}

/// Interactive yes/no prompt. Prompt failures (e.g. a closed TTY) are
/// treated as a refusal.
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Prompter for TerminalPrompter {
    async fn ask(&self, message: &str) -> Answer {
        let prompt = message.to_string();
        let confirmed = spawn_blocking(move || cliclack::confirm(prompt).interact().unwrap_or(false))
            .await
            .unwrap_or(false);
        if confirmed {
            Answer::Yes
        } else {
            Answer::No
        }
    }
}

/// Non-interactive prompter that accepts every fix (`--yes`).
pub struct AssumeYesPrompter;

impl AssumeYesPrompter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Prompter for AssumeYesPrompter {
    async fn ask(&self, _message: &str) -> Answer {
        Answer::Yes
    }
}
