use chrono::Local;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::services::date_format::format_iso_date;

#[derive(Parser)]
#[command(name = "mission-control", author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project the completion date of a quantity of remaining work
    Estimate {
        /// Units of work left (e.g. story points)
        #[arg(short = 'w', long, allow_negative_numbers = true)]
        remaining_work: f64,
        /// Hours required per unit of work
        #[arg(short, long, allow_negative_numbers = true)]
        rate: Option<f64>,
        /// Date to skip (YYYY-MM-DD), may be repeated
        #[arg(short = 'x', long = "exclude")]
        excluded_dates: Vec<String>,
        /// Multiplier on the 8 hour workday
        #[arg(short, long, allow_negative_numbers = true)]
        capacity: Option<f64>,
        /// Holiday YAML file or directory
        #[arg(long)]
        holidays: Option<String>,
        /// Optional path to a config YAML
        #[arg(long)]
        config: Option<String>,
        /// Date to estimate from (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_today())]
        today: String,
        /// Print the date as weekday, month and day
        #[arg(short, long)]
        long: bool,
    },
    /// Report progress and projected completion per epic
    Report {
        /// Dashboard JSON file
        #[arg(short, long)]
        input: String,
        /// Optional output YAML file
        #[arg(short, long)]
        output: Option<String>,
        /// Hours required per story point, overrides the dashboard's rate
        #[arg(short, long)]
        rate: Option<f64>,
        /// Holiday YAML file or directory
        #[arg(long)]
        holidays: Option<String>,
        /// Capacity store YAML file
        #[arg(long)]
        capacities: Option<String>,
        /// Optional path to a config YAML
        #[arg(long)]
        config: Option<String>,
        /// Date to estimate from (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_today())]
        today: String,
    },
    /// Plot epic progress bars from a dashboard into a PNG chart
    PlotProgress {
        /// Dashboard JSON file
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Persist the capacity multiplier of an epic
    SetCapacity {
        /// Capacity store YAML file
        #[arg(short, long)]
        store: String,
        /// Entity id, usually an epic id
        #[arg(short, long)]
        id: String,
        /// Multiplier on the 8 hour workday
        #[arg(short, long)]
        capacity: f64,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn default_today() -> String {
    format_iso_date(Local::now().date_naive())
}
