use domain::error::FixError;
use domain::ports::console::{Answer, Console, Prompter};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Question shown once the action description has been printed.
pub const FIX_IT_PROMPT: &str = "Fix it?";

/// Owner of the consent protocol around side-effecting fixes. One
/// instance is shared by every autofix check of a run so that at most
/// one confirmation is in flight at a time.
pub struct FixConfirmer {
    console: Arc<dyn Console>,
    prompter: Arc<dyn Prompter>,
    gate: Mutex<()>,
}

impl FixConfirmer {
    pub fn new(console: Arc<dyn Console>, prompter: Arc<dyn Prompter>) -> Self {
        Self {
            console,
            prompter,
            gate: Mutex::new(()),
        }
    }

    /// Drive one consent-gated fix: print `description`, ask for a
    /// yes/no decision, then run `action` on yes. On no, print
    /// `skip_notice` and fail with `FixError::Skipped`. Both notices
    /// are emitted exactly once, in that order.
    pub async fn confirm<F, Fut>(
        &self,
        description: &str,
        skip_notice: &str,
        action: F,
    ) -> Result<(), FixError>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<(), FixError>> + Send,
    {
        let _guard = self.gate.lock().await;
        self.console.info(description);
        match self.prompter.ask(FIX_IT_PROMPT).await {
            Answer::Yes => action().await,
            Answer::No => {
                self.console.info(skip_notice);
                Err(FixError::Skipped)
            }
        }
    }
}
