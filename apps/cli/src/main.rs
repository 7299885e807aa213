mod commands;
mod ui;

use clap::{Parser, Subcommand};
use commands::diagnose::DiagnoseCommand;
use commands::fix::FixCommand;

#[derive(Parser)]
#[command(name = "env-physician")]
#[command(version, about = "Diagnose and repair your development environment", long_about = None)]
struct Cli {
    /// Verbose diagnostic logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the environment and print the health report
    Diagnose(DiagnoseCommand),
    /// Probe the environment, then walk through fixes for what failed
    Fix(FixCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    match cli.command {
        Commands::Diagnose(cmd) => cmd.execute().await,
        Commands::Fix(cmd) => cmd.execute().await,
    }
}
