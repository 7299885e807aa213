use async_trait::async_trait;
use domain::check::{Check, DiagnosticResult, FixOutcome};
use domain::error::FixError;
use domain::ports::node::NodeLocator;
use std::sync::Arc;

/// Verifies a Node.js executable can be located on this host.
pub struct NodeCheck {
    locator: Arc<dyn NodeLocator>,
}

impl NodeCheck {
    pub fn new(locator: Arc<dyn NodeLocator>) -> Self {
        Self { locator }
    }
}

#[async_trait]
impl Check for NodeCheck {
    fn name(&self) -> String {
        "Node.js binary".to_string()
    }

    async fn diagnose(&self) -> DiagnosticResult {
        match self.locator.detect().await {
            Some(path) => DiagnosticResult::pass(format!(
                "The Node.js binary was found at: {}",
                path.display()
            )),
            None => DiagnosticResult::fail("The Node.js binary was NOT found!"),
        }
    }

    async fn fix(&self) -> Result<FixOutcome, FixError> {
        Ok(FixOutcome::Manual("Manually setup Node.js.".to_string()))
    }
}
