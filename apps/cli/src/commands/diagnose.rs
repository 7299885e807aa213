use anyhow::{Context, Result};
use clap::Parser;
use env_physician::application::{Doctor, FixConfirmer};
use env_physician::domain::ports::console::{Console, Prompter};
use env_physician::infrastructure::{TerminalConsole, TerminalPrompter};
use std::sync::Arc;

use super::{system_ports, Selection};
use crate::ui;

#[derive(Parser, Debug)]
pub struct DiagnoseCommand {
    #[command(flatten)]
    pub selection: Selection,

    /// Print the report as JSON instead of the interactive view
    #[arg(long)]
    pub json: bool,
}

impl DiagnoseCommand {
    pub async fn execute(self) -> Result<()> {
        let ports = system_ports();
        let console: Arc<dyn Console> = Arc::new(TerminalConsole::new());
        let prompter: Arc<dyn Prompter> = Arc::new(TerminalPrompter::new());
        let confirmer = Arc::new(FixConfirmer::new(console, prompter));

        let mut doctor = Doctor::new();
        doctor.register_all(self.selection.build_checks(&ports, &confirmer));

        if self.json {
            let report = doctor.diagnose().await;
            let rendered = serde_json::to_string_pretty(&report.view())
                .context("Failed to serialize the report")?;
            println!("{rendered}");
            if !report.is_healthy() {
                std::process::exit(1);
            }
            return Ok(());
        }

        cliclack::intro(console::style("envPhysician").bold())?;
        let report = doctor.diagnose().await;
        ui::render_report(&report)?;
        ui::render_summary(&report)?;

        if !report.is_healthy() {
            std::process::exit(1);
        }
        Ok(())
    }
}
