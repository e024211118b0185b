pub mod base_commands;
pub mod capacity_cmd;
pub mod estimate_cmd;
pub mod plot_progress_cmd;
pub mod report_cmd;
pub mod report_format;
