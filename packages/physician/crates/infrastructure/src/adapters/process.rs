use async_trait::async_trait;
use domain::error::ExecError;
use domain::ports::process::{ExecOutput, ProcessRunner};
use tokio::process::Command;

/// Runs commands on the host and captures their output.
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessRunner for SystemProcessRunner {
    async fn exec(&self, command: &str, args: &[&str]) -> Result<ExecOutput, ExecError> {
        let rendered = if args.is_empty() {
            command.to_string()
        } else {
            format!("{} {}", command, args.join(" "))
        };
        tracing::debug!("exec: {}", rendered);

        let output = Command::new(command)
            .args(args)
            .output()
            .await
            .map_err(|source| ExecError::Spawn {
                command: rendered.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            return Err(ExecError::Failed {
                command: rendered,
                stderr,
            });
        }

        Ok(ExecOutput { stdout, stderr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn captures_stdout_of_a_clean_exit() {
        let runner = SystemProcessRunner::new();
        let output = runner.exec("sh", &["-c", "printf checkup"]).await.unwrap();
        assert_eq!(output.stdout, "checkup");
    }

    #[tokio::test]
    async fn non_zero_exit_is_an_error() {
        let runner = SystemProcessRunner::new();
        let err = runner.exec("sh", &["-c", "exit 3"]).await.unwrap_err();
        assert!(matches!(err, ExecError::Failed { .. }));
    }

    #[tokio::test]
    async fn missing_binary_is_a_spawn_error() {
        let runner = SystemProcessRunner::new();
        let err = runner
            .exec("definitely-not-a-real-binary-7c41", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, ExecError::Spawn { .. }));
    }
}
