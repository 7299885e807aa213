use async_trait::async_trait;
use domain::ports::env::EnvProbe;
use domain::ports::fs::PathProbe;
use domain::ports::node::NodeLocator;
use std::path::PathBuf;
use std::sync::Arc;

/// Install prefixes probed when neither NODE_BIN nor the PATH resolve.
const COMMON_LOCATIONS: &[&str] = &["/usr/local/bin/node", "/opt/local/bin/node"];

/// Locates the Node.js executable: the NODE_BIN override first, then a
/// lookup through the injected PATH value, then the usual install
/// prefixes.
pub struct SystemNodeLocator {
    env: Arc<dyn EnvProbe>,
    probe: Arc<dyn PathProbe>,
}

impl SystemNodeLocator {
    pub fn new(env: Arc<dyn EnvProbe>, probe: Arc<dyn PathProbe>) -> Self {
        Self { env, probe }
    }
}

#[async_trait]
impl NodeLocator for SystemNodeLocator {
    async fn detect(&self) -> Option<PathBuf> {
        if let Some(bin) = self.env.get("NODE_BIN") {
            let path = PathBuf::from(bin);
            if self.probe.exists(&path) {
                return Some(path);
            }
            tracing::debug!("NODE_BIN points at a missing file: {}", path.display());
        }

        let cwd = std::env::current_dir().unwrap_or(PathBuf::from("."));
        if let Ok(path) = which::which_in("node", self.env.get("PATH"), cwd) {
            return Some(path);
        }

        for candidate in COMMON_LOCATIONS {
            let path = PathBuf::from(candidate);
            if self.probe.exists(&path) {
                return Some(path);
            }
        }

        None
    }
}
