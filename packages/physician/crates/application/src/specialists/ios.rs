//! macOS developer-tooling checks.

use crate::confirm::FixConfirmer;
use async_trait::async_trait;
use domain::check::{Check, DiagnosticResult, FixOutcome};
use domain::error::{ExecError, FixError};
use domain::ports::fs::PathProbe;
use domain::ports::process::ProcessRunner;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Product version reported by `sw_vers` (e.g. "10.10").
async fn macos_version(runner: &Arc<dyn ProcessRunner>) -> Result<String, ExecError> {
    let output = runner.exec("sw_vers", &["-productVersion"]).await?;
    Ok(output.stdout.trim().to_string())
}

/// Consent-gated run of the `authorize-ios` helper, shared by the
/// security checks below.
async fn authorize_ios(
    confirmer: &FixConfirmer,
    runner: &Arc<dyn ProcessRunner>,
) -> Result<FixOutcome, FixError> {
    let runner = Arc::clone(runner);
    confirmer
        .confirm(
            "The authorize iOS script need to be run.",
            "Skipping you will need to run the authorize iOS manually.",
            move || async move {
                runner.exec("authorize-ios", &[]).await?;
                Ok(())
            },
        )
        .await?;
    Ok(FixOutcome::Applied)
}

/// Verifies the Xcode install path reported by `xcode-select`.
pub struct XcodeCheck {
    runner: Arc<dyn ProcessRunner>,
    probe: Arc<dyn PathProbe>,
}

impl XcodeCheck {
    pub fn new(runner: Arc<dyn ProcessRunner>, probe: Arc<dyn PathProbe>) -> Self {
        Self { runner, probe }
    }
}

#[async_trait]
impl Check for XcodeCheck {
    fn name(&self) -> String {
        "Xcode".to_string()
    }

    async fn diagnose(&self) -> DiagnosticResult {
        let output = match self.runner.exec("xcode-select", &["--print-path"]).await {
            Ok(output) => output,
            Err(_) => return DiagnosticResult::fail("Xcode is NOT installed!"),
        };
        let path = PathBuf::from(output.stdout.trim());
        if self.probe.exists(&path) {
            DiagnosticResult::pass(format!("Xcode is installed at: {}", path.display()))
        } else {
            DiagnosticResult::fail(format!("Xcode cannot be found at '{}'!", path.display()))
        }
    }

    async fn fix(&self) -> Result<FixOutcome, FixError> {
        Ok(FixOutcome::Manual("Manually install Xcode.".to_string()))
    }
}

/// Verifies the Command Line Tools package receipt via `pkgutil`.
pub struct XcodeCommandLineToolsCheck {
    runner: Arc<dyn ProcessRunner>,
    confirmer: Arc<FixConfirmer>,
}

impl XcodeCommandLineToolsCheck {
    pub fn new(runner: Arc<dyn ProcessRunner>, confirmer: Arc<FixConfirmer>) -> Self {
        Self { runner, confirmer }
    }
}

#[async_trait]
impl Check for XcodeCommandLineToolsCheck {
    fn name(&self) -> String {
        "Xcode Command Line Tools".to_string()
    }

    fn autofix(&self) -> bool {
        true
    }

    async fn diagnose(&self) -> DiagnosticResult {
        let version = match macos_version(&self.runner).await {
            Ok(version) => version,
            Err(_) => return DiagnosticResult::fail("Xcode Command Line Tools are NOT installed!"),
        };
        // The receipt id changed after 10.8.
        let pkg = if version == "10.8" {
            "com.apple.pkg.DeveloperToolsCLI"
        } else {
            "com.apple.pkg.CLTools_Executables"
        };
        let arg = format!("--pkg-info={}", pkg);

        match self.runner.exec("pkgutil", &[arg.as_str()]).await {
            Ok(output) if output.stdout.contains("install-time") => {
                DiagnosticResult::pass("Xcode Command Line Tools are installed.")
            }
            _ => DiagnosticResult::fail("Xcode Command Line Tools are NOT installed!"),
        }
    }

    async fn fix(&self) -> Result<FixOutcome, FixError> {
        let runner = Arc::clone(&self.runner);
        self.confirmer
            .confirm(
                "The following command need be executed: xcode-select --install",
                "Skipping you will need to install Xcode manually.",
                move || async move {
                    runner.exec("xcode-select", &["--install"]).await?;
                    Ok(())
                },
            )
            .await?;
        Ok(FixOutcome::Applied)
    }
}

/// Verifies DevToolsSecurity reports developer mode as enabled.
pub struct DevToolsSecurityCheck {
    runner: Arc<dyn ProcessRunner>,
    confirmer: Arc<FixConfirmer>,
}

impl DevToolsSecurityCheck {
    pub fn new(runner: Arc<dyn ProcessRunner>, confirmer: Arc<FixConfirmer>) -> Self {
        Self { runner, confirmer }
    }
}

#[async_trait]
impl Check for DevToolsSecurityCheck {
    fn name(&self) -> String {
        "DevToolsSecurity".to_string()
    }

    fn autofix(&self) -> bool {
        true
    }

    async fn diagnose(&self) -> DiagnosticResult {
        match self.runner.exec("DevToolsSecurity", &[]).await {
            Ok(output) if output.stdout.contains("enabled") => {
                DiagnosticResult::pass("DevToolsSecurity is enabled.")
            }
            _ => DiagnosticResult::fail("DevToolsSecurity is NOT enabled!"),
        }
    }

    async fn fix(&self) -> Result<FixOutcome, FixError> {
        authorize_ios(&self.confirmer, &self.runner).await
    }
}

/// Verifies the taskport privilege is granted to developers.
pub struct AuthorizationDbCheck {
    runner: Arc<dyn ProcessRunner>,
    probe: Arc<dyn PathProbe>,
    confirmer: Arc<FixConfirmer>,
}

impl AuthorizationDbCheck {
    pub fn new(
        runner: Arc<dyn ProcessRunner>,
        probe: Arc<dyn PathProbe>,
        confirmer: Arc<FixConfirmer>,
    ) -> Self {
        Self {
            runner,
            probe,
            confirmer,
        }
    }

    /// `security authorizationdb` is unavailable on 10.8; the grants
    /// live in `/etc/authorization` there.
    async fn diagnose_legacy(&self) -> DiagnosticResult {
        if let Ok(version) = macos_version(&self.runner).await {
            if version == "10.8" {
                return match self.probe.read_to_string(Path::new("/etc/authorization")) {
                    Ok(data) if legacy_taskport_grant(&data) => {
                        DiagnosticResult::pass("The Authorization DB is set up properly.")
                    }
                    _ => DiagnosticResult::fail("The Authorization DB is NOT set up properly."),
                };
            }
        }
        DiagnosticResult::fail("The Authorization DB is NOT set up properly.")
    }
}

/// Looks for a `system.privilege.taskport` dict carrying
/// `allow-root: true` in a 10.8-era authorization plist.
fn legacy_taskport_grant(data: &str) -> bool {
    let rest = match data.find("<key>system.privilege.taskport</key>") {
        Some(at) => data[at + "<key>system.privilege.taskport</key>".len()..].trim_start(),
        None => return false,
    };
    let rest = match rest.strip_prefix("<dict>") {
        Some(rest) => rest.trim_start(),
        None => return false,
    };
    let rest = match rest.strip_prefix("<key>allow-root</key>") {
        Some(rest) => rest.trim_start(),
        None => return false,
    };
    rest.starts_with("<true/>")
}

#[async_trait]
impl Check for AuthorizationDbCheck {
    fn name(&self) -> String {
        "Authorization DB".to_string()
    }

    fn autofix(&self) -> bool {
        true
    }

    async fn diagnose(&self) -> DiagnosticResult {
        match self
            .runner
            .exec("security", &["authorizationdb", "read", "system.privilege.taskport"])
            .await
        {
            Ok(output) => {
                if output.stdout.contains("is-developer") {
                    DiagnosticResult::pass("The Authorization DB is set up properly.")
                } else {
                    DiagnosticResult::fail("The Authorization DB is NOT set up properly.")
                }
            }
            Err(_) => self.diagnose_legacy().await,
        }
    }

    async fn fix(&self) -> Result<FixOutcome, FixError> {
        authorize_ios(&self.confirmer, &self.runner).await
    }
}
