use std::process::ExitCode;

use tracing::info;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_dashboard_report;
use crate::domain::calendar::BusinessCalendar;
use crate::services::capacity_store::CapacityStore;
use crate::services::config::EstimatorConfig;
use crate::services::dashboard_json::load_dashboard_from_json_file;
use crate::services::dashboard_report::{build_dashboard_report, ReportSettings};
use crate::services::date_format::parse_iso_date;
use crate::services::holiday_yaml::load_holidays;

pub fn report_command(cmd: Commands) -> ExitCode {
    let Commands::Report {
        input,
        output,
        rate,
        holidays,
        capacities,
        config,
        today,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let config = match EstimatorConfig::load_or_default(config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let Some(today) = parse_iso_date(&today) else {
        eprintln!("Invalid date: {today} (expected YYYY-MM-DD)");
        return ExitCode::FAILURE;
    };

    let dashboard = match load_dashboard_from_json_file(&input) {
        Ok(dashboard) => dashboard,
        Err(e) => {
            eprintln!("Failed to load dashboard: {e}");
            return ExitCode::FAILURE;
        }
    };

    let holidays = match holidays.or(config.holidays) {
        Some(path) => match load_holidays(&path) {
            Ok(calendar) => calendar,
            Err(e) => {
                eprintln!("Failed to load holidays: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => BusinessCalendar::new(),
    };

    let capacities = match capacities.or(config.capacity_store) {
        Some(path) => match CapacityStore::load(&path) {
            Ok(store) => store,
            Err(e) => {
                eprintln!("Failed to load capacities: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => CapacityStore::new(),
    };

    let settings = ReportSettings {
        rate: rate.or(dashboard.rate).or(config.default_rate),
        default_capacity: config.default_capacity,
        holidays: &holidays,
        capacities: &capacities,
        today,
    };
    let report = build_dashboard_report(&dashboard, &settings);
    println!("{}", format_dashboard_report(&report));

    if let Some(output) = output {
        let yaml = match serde_yaml::to_string(&report) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize report: {e}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write report: {e}");
            return ExitCode::FAILURE;
        }
        info!(%output, epics = report.epics.len(), "report written");
        println!("Report written to {output}");
    }
    ExitCode::SUCCESS
}
