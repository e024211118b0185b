use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::services::progress_plot::plot_progress_from_json_file;

pub fn plot_progress_command(cmd: Commands) -> ExitCode {
    if let Commands::PlotProgress { input, output } = cmd {
        match plot_progress_from_json_file(&input, &output) {
            Ok(()) => {
                println!("Progress plot written to {output}");
                return ExitCode::SUCCESS;
            }
            Err(e) => eprintln!("Failed to plot progress: {e}"),
        }
    }
    ExitCode::FAILURE
}
