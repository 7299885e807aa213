//! Concrete check variants, grouped the way the CLI offers them.

pub mod android;
pub mod fs;
pub mod ios;
pub mod node;
pub mod path;

use crate::confirm::FixConfirmer;
use domain::check::Check;
use domain::ports::env::EnvProbe;
use domain::ports::fs::PathProbe;
use domain::ports::node::NodeLocator;
use domain::ports::process::ProcessRunner;
use std::sync::Arc;

use self::android::AndroidSdkCheck;
use self::ios::{AuthorizationDbCheck, DevToolsSecurityCheck, XcodeCheck, XcodeCommandLineToolsCheck};
use self::node::NodeCheck;
use self::path::BinaryCheck;

/// The macOS developer-tooling battery.
pub fn ios_checks(
    runner: &Arc<dyn ProcessRunner>,
    probe: &Arc<dyn PathProbe>,
    locator: &Arc<dyn NodeLocator>,
    confirmer: &Arc<FixConfirmer>,
) -> Vec<Arc<dyn Check>> {
    vec![
        Arc::new(XcodeCheck::new(Arc::clone(runner), Arc::clone(probe))),
        Arc::new(XcodeCommandLineToolsCheck::new(
            Arc::clone(runner),
            Arc::clone(confirmer),
        )),
        Arc::new(DevToolsSecurityCheck::new(
            Arc::clone(runner),
            Arc::clone(confirmer),
        )),
        Arc::new(AuthorizationDbCheck::new(
            Arc::clone(runner),
            Arc::clone(probe),
            Arc::clone(confirmer),
        )),
        Arc::new(NodeCheck::new(Arc::clone(locator))),
    ]
}

/// The Android tooling battery.
pub fn android_checks(
    runner: &Arc<dyn ProcessRunner>,
    env: &Arc<dyn EnvProbe>,
    probe: &Arc<dyn PathProbe>,
) -> Vec<Arc<dyn Check>> {
    let adb = if cfg!(windows) { "adb.exe" } else { "adb" };
    vec![
        Arc::new(BinaryCheck::new(adb, Arc::clone(runner), Arc::clone(probe))),
        Arc::new(AndroidSdkCheck::new(
            "android-16",
            Arc::clone(env),
            Arc::clone(probe),
        )),
        Arc::new(AndroidSdkCheck::new(
            "android-19",
            Arc::clone(env),
            Arc::clone(probe),
        )),
    ]
}

/// The build-tool battery.
pub fn dev_checks(
    runner: &Arc<dyn ProcessRunner>,
    probe: &Arc<dyn PathProbe>,
) -> Vec<Arc<dyn Check>> {
    let (mvn, ant) = if cfg!(windows) {
        ("mvn.bat", "ant.bat")
    } else {
        ("mvn", "ant")
    };
    vec![
        Arc::new(BinaryCheck::new(mvn, Arc::clone(runner), Arc::clone(probe))),
        Arc::new(BinaryCheck::new(ant, Arc::clone(runner), Arc::clone(probe))),
    ]
}
