use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use mission_control::commands::base_commands::{CliArgs, Commands};
use mission_control::commands::capacity_cmd::set_capacity_command;
use mission_control::commands::estimate_cmd::estimate_command;
use mission_control::commands::plot_progress_cmd::plot_progress_command;
use mission_control::commands::report_cmd::report_command;

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries command output only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Estimate { .. } => estimate_command(cmd),
        cmd @ Commands::Report { .. } => report_command(cmd),
        cmd @ Commands::PlotProgress { .. } => plot_progress_command(cmd),
        cmd @ Commands::SetCapacity { .. } => set_capacity_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            ExitCode::SUCCESS
        }
    }
}
