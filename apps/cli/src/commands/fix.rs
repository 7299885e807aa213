use anyhow::Result;
use clap::Parser;
use env_physician::application::{Doctor, FixConfirmer};
use env_physician::domain::ports::console::{Console, Prompter};
use env_physician::infrastructure::{AssumeYesPrompter, TerminalConsole, TerminalPrompter};
use std::sync::Arc;

use super::{system_ports, Selection};
use crate::ui;

#[derive(Parser, Debug)]
pub struct FixCommand {
    #[command(flatten)]
    pub selection: Selection,

    /// Accept every offered fix without prompting
    #[arg(long, short)]
    pub yes: bool,
}

impl FixCommand {
    pub async fn execute(self) -> Result<()> {
        let ports = system_ports();
        let console: Arc<dyn Console> = Arc::new(TerminalConsole::new());
        let prompter: Arc<dyn Prompter> = if self.yes {
            Arc::new(AssumeYesPrompter::new())
        } else {
            Arc::new(TerminalPrompter::new())
        };
        let confirmer = Arc::new(FixConfirmer::new(console, prompter));

        let mut doctor = Doctor::new();
        doctor.register_all(self.selection.build_checks(&ports, &confirmer));

        cliclack::intro(console::style("envPhysician").bold())?;
        let report = doctor.diagnose().await;
        ui::render_report(&report)?;

        if report.is_healthy() {
            cliclack::outro("System Health: EXCELLENT")?;
            return Ok(());
        }

        cliclack::log::step(format!(
            "Attempting fixes for {} failing check(s)...",
            report.failed()
        ))?;
        let fixes = doctor.fix(&report).await;
        ui::render_fixes(&fixes)?;
        cliclack::outro("Re-run `env-physician diagnose` to verify the repairs.")?;
        std::process::exit(1);
    }
}
