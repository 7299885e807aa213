pub mod diagnose;
pub mod fix;

use clap::Args;
use env_physician::application::specialists::fs::{DirCheck, FileCheck};
use env_physician::application::specialists::path::BinaryCheck;
use env_physician::application::{specialists, FixConfirmer};
use env_physician::domain::check::Check;
use env_physician::domain::ports::env::EnvProbe;
use env_physician::domain::ports::fs::PathProbe;
use env_physician::domain::ports::node::NodeLocator;
use env_physician::domain::ports::process::ProcessRunner;
use env_physician::infrastructure::{
    SystemEnvProbe, SystemNodeLocator, SystemPathProbe, SystemProcessRunner,
};
use std::path::PathBuf;
use std::sync::Arc;

/// System collaborators shared by every check of a run.
pub struct Ports {
    pub runner: Arc<dyn ProcessRunner>,
    pub probe: Arc<dyn PathProbe>,
    pub env: Arc<dyn EnvProbe>,
    pub locator: Arc<dyn NodeLocator>,
}

pub fn system_ports() -> Ports {
    let runner: Arc<dyn ProcessRunner> = Arc::new(SystemProcessRunner::new());
    let probe: Arc<dyn PathProbe> = Arc::new(SystemPathProbe::new());
    let env: Arc<dyn EnvProbe> = Arc::new(SystemEnvProbe::new());
    let locator: Arc<dyn NodeLocator> =
        Arc::new(SystemNodeLocator::new(Arc::clone(&env), Arc::clone(&probe)));
    Ports {
        runner,
        probe,
        env,
        locator,
    }
}

/// Check-battery selection shared by the subcommands. With no selection
/// at all, the iOS and Android batteries run.
#[derive(Args, Debug, Clone)]
pub struct Selection {
    /// Run the iOS / macOS toolchain checks
    #[arg(long)]
    pub ios: bool,

    /// Run the Android toolchain checks
    #[arg(long)]
    pub android: bool,

    /// Run the build-tool checks (mvn, ant)
    #[arg(long)]
    pub dev: bool,

    /// Verify a directory exists (repeatable)
    #[arg(long, value_name = "PATH")]
    pub dir: Vec<PathBuf>,

    /// Verify a file exists (repeatable)
    #[arg(long, value_name = "PATH")]
    pub file: Vec<PathBuf>,

    /// Verify a binary resolves in PATH (repeatable)
    #[arg(long, value_name = "NAME")]
    pub binary: Vec<String>,
}

impl Selection {
    fn is_default(&self) -> bool {
        !self.ios
            && !self.android
            && !self.dev
            && self.dir.is_empty()
            && self.file.is_empty()
            && self.binary.is_empty()
    }

    pub fn build_checks(&self, ports: &Ports, confirmer: &Arc<FixConfirmer>) -> Vec<Arc<dyn Check>> {
        let default = self.is_default();
        let mut checks: Vec<Arc<dyn Check>> = Vec::new();

        if self.ios || default {
            checks.extend(specialists::ios_checks(
                &ports.runner,
                &ports.probe,
                &ports.locator,
                confirmer,
            ));
        }
        if self.android || default {
            checks.extend(specialists::android_checks(
                &ports.runner,
                &ports.env,
                &ports.probe,
            ));
        }
        if self.dev {
            checks.extend(specialists::dev_checks(&ports.runner, &ports.probe));
        }
        for dir in &self.dir {
            checks.push(Arc::new(DirCheck::new(dir.clone(), Arc::clone(&ports.probe))));
        }
        for file in &self.file {
            checks.push(Arc::new(FileCheck::new(
                file.clone(),
                Arc::clone(&ports.probe),
                Arc::clone(&ports.runner),
                Arc::clone(confirmer),
            )));
        }
        for binary in &self.binary {
            checks.push(Arc::new(BinaryCheck::new(
                binary.clone(),
                Arc::clone(&ports.runner),
                Arc::clone(&ports.probe),
            )));
        }

        checks
    }
}
