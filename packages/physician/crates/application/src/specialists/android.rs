use async_trait::async_trait;
use domain::check::{Check, DiagnosticResult, FixOutcome};
use domain::error::FixError;
use domain::ports::env::EnvProbe;
use domain::ports::fs::PathProbe;
use std::path::Path;
use std::sync::Arc;

/// Verifies an Android platform SDK is installed under ANDROID_HOME.
pub struct AndroidSdkCheck {
    sdk: String,
    env: Arc<dyn EnvProbe>,
    probe: Arc<dyn PathProbe>,
}

impl AndroidSdkCheck {
    pub fn new(sdk: impl Into<String>, env: Arc<dyn EnvProbe>, probe: Arc<dyn PathProbe>) -> Self {
        Self {
            sdk: sdk.into(),
            env,
            probe,
        }
    }
}

#[async_trait]
impl Check for AndroidSdkCheck {
    fn name(&self) -> String {
        self.sdk.clone()
    }

    async fn diagnose(&self) -> DiagnosticResult {
        let home = match self.env.get("ANDROID_HOME") {
            Some(home) => home,
            None => {
                return DiagnosticResult::fail(format!(
                    "{} could not be found because ANDROID_HOME is NOT set!",
                    self.sdk
                ));
            }
        };

        let path = Path::new(&home).join("platforms").join(&self.sdk);
        if self.probe.exists(&path) {
            DiagnosticResult::pass(format!("{} was found at: {}", self.sdk, path.display()))
        } else {
            DiagnosticResult::fail(format!(
                "{} could NOT be found at '{}'!",
                self.sdk,
                path.display()
            ))
        }
    }

    async fn fix(&self) -> Result<FixOutcome, FixError> {
        let instructions = if self.env.get("ANDROID_HOME").is_some() {
            format!("Manually install the {} sdk.", self.sdk)
        } else {
            "Manually configure ANDROID_HOME.".to_string()
        };
        Ok(FixOutcome::Manual(instructions))
    }
}
