use anyhow::Result;
use env_physician::application::{FixReport, FixStatus};
use env_physician::domain::report::Report;

/// One line per diagnosed check, in report order.
pub fn render_report(report: &Report) -> Result<()> {
    for entry in report.iter() {
        let result = entry.result();
        if result.ok {
            cliclack::log::success(&result.message)?;
        } else {
            cliclack::log::error(&result.message)?;
        }
    }
    Ok(())
}

pub fn render_summary(report: &Report) -> Result<()> {
    if report.is_healthy() {
        cliclack::outro("System Health: EXCELLENT")?;
    } else {
        cliclack::outro(
            console::style(format!(
                "System Health: {} of {} checks failed",
                report.failed(),
                report.len()
            ))
            .red()
            .to_string(),
        )?;
    }
    Ok(())
}

pub fn render_fixes(fixes: &[FixReport]) -> Result<()> {
    for fix in fixes {
        match &fix.status {
            FixStatus::Fixed => cliclack::log::success(format!("{}: fixed", fix.name))?,
            FixStatus::Manual(instructions) => {
                cliclack::log::warning(format!("{}: {}", fix.name, instructions))?
            }
            FixStatus::Skipped => cliclack::log::warning(format!("{}: fix skipped", fix.name))?,
            FixStatus::Failed(reason) => {
                cliclack::log::error(format!("{}: fix failed: {}", fix.name, reason))?
            }
        }
    }
    Ok(())
}
