use application::specialists::fs::{DirCheck, FileCheck};
use application::{Doctor, FixConfirmer, FixReport, FixStatus};
use domain::ports::console::Answer;
use domain::testkit::{FakePathProbe, FakeProcessRunner, RecordingConsole, ScriptedPrompter};
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[tokio::test]
async fn a_full_visit_diagnoses_then_walks_through_fixes() {
    let probe = FakePathProbe::new();
    probe.set_dir("/opt/present");

    let runner = FakeProcessRunner::new();
    runner.push_stdout("");

    let console = RecordingConsole::new();
    let prompter = ScriptedPrompter::new();
    // First offered fix declined, second accepted.
    prompter.push_answer(Answer::No);
    prompter.push_answer(Answer::Yes);
    let confirmer = Arc::new(FixConfirmer::new(
        Arc::new(console.clone()),
        Arc::new(prompter.clone()),
    ));

    let probe: Arc<dyn domain::ports::fs::PathProbe> = Arc::new(probe);
    let runner_port: Arc<dyn domain::ports::process::ProcessRunner> = Arc::new(runner.clone());

    let mut doctor = Doctor::new();
    doctor.register(Arc::new(DirCheck::new("/opt/present", Arc::clone(&probe))));
    doctor.register(Arc::new(DirCheck::new("/opt/absent", Arc::clone(&probe))));
    doctor.register(Arc::new(FileCheck::new(
        "/etc/first.conf",
        Arc::clone(&probe),
        Arc::clone(&runner_port),
        Arc::clone(&confirmer),
    )));
    doctor.register(Arc::new(FileCheck::new(
        "/etc/second.conf",
        Arc::clone(&probe),
        Arc::clone(&runner_port),
        Arc::clone(&confirmer),
    )));

    let (report, fixes) = doctor.run().await;

    let messages: Vec<&str> = report.iter().map(|e| e.result().message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Found directory at: /opt/present",
            "Could NOT find directory at '/opt/absent'!",
            "Could NOT find file at '/etc/first.conf'!",
            "Could NOT find file at '/etc/second.conf'!",
        ]
    );
    assert_eq!(report.passed(), 1);
    assert_eq!(report.failed(), 3);

    assert_eq!(
        fixes,
        vec![
            FixReport {
                name: "directory /opt/absent".to_string(),
                status: FixStatus::Manual("Manually create a directory at: /opt/absent".to_string()),
            },
            FixReport {
                name: "file /etc/first.conf".to_string(),
                status: FixStatus::Skipped,
            },
            FixReport {
                name: "file /etc/second.conf".to_string(),
                status: FixStatus::Fixed,
            },
        ]
    );

    // One confirmation at a time: the declined fix finishes its two
    // notices before the accepted one starts.
    assert_eq!(
        console.messages(),
        vec![
            "The following command need be executed: touch '/etc/first.conf'",
            "Skipping you will need to touch '/etc/first.conf' manually.",
            "The following command need be executed: touch '/etc/second.conf'",
        ]
    );
    assert_eq!(
        runner.calls(),
        vec![("touch".to_string(), vec!["/etc/second.conf".to_string()])]
    );
}

#[tokio::test]
async fn diagnosis_is_repeatable_after_fixes() {
    let probe = FakePathProbe::new();

    let mut doctor = Doctor::new();
    doctor.register(Arc::new(DirCheck::new("/var/empty", Arc::new(probe.clone()))));

    let before = doctor.diagnose().await;
    assert_eq!(before.failed(), 1);

    // The environment changes out of band; a fresh pass sees it.
    probe.set_dir("/var/empty");
    let after = doctor.diagnose().await;
    assert_eq!(after.failed(), 0);
    assert!(after.is_healthy());
}
