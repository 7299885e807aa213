use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

/// Asks the user a yes/no question.
#[async_trait]
pub trait Prompter: Send + Sync {
    async fn ask(&self, message: &str) -> Answer;
}

/// Sink for user-facing notices the fix flow emits outside the report
/// itself (action descriptions, skip notices).
pub trait Console: Send + Sync {
    fn info(&self, message: &str);
}
