use async_trait::async_trait;
use std::path::PathBuf;

/// Locates the Node.js executable on this host, if any.
#[async_trait]
pub trait NodeLocator: Send + Sync {
    async fn detect(&self) -> Option<PathBuf>;
}
