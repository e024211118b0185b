use std::process::ExitCode;

use tracing::info;

use crate::commands::base_commands::Commands;
use crate::domain::calendar::BusinessCalendar;
use crate::domain::estimation::EstimationInput;
use crate::services::completion_estimate::estimate_completion;
use crate::services::config::EstimatorConfig;
use crate::services::date_format::{format_iso_date, format_long_date, parse_iso_date};
use crate::services::holiday_yaml::load_holidays;

pub fn estimate_command(cmd: Commands) -> ExitCode {
    let Commands::Estimate {
        remaining_work,
        rate,
        excluded_dates,
        capacity,
        holidays,
        config,
        today,
        long,
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

    let mut calendar = match holidays.or(config.holidays) {
        Some(path) => match load_holidays(&path) {
            Ok(calendar) => calendar,
            Err(e) => {
                eprintln!("Failed to load holidays: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => BusinessCalendar::new(),
    };
    calendar.merge(BusinessCalendar::from_excluded_dates(&excluded_dates));

    let input = EstimationInput::new(remaining_work, rate.or(config.default_rate))
        .with_excluded_dates(calendar.excluded_dates)
        .with_capacity(capacity.unwrap_or(config.default_capacity));

    match estimate_completion(&input, today) {
        Some(date) => {
            let iso = format_iso_date(date);
            if long {
                println!("{}", format_long_date(&iso));
            } else {
                println!("{iso}");
            }
        }
        None => info!(
            remaining_work = input.remaining_work,
            rate = ?input.rate,
            capacity = input.capacity,
            "no projected completion date"
        ),
    }
    ExitCode::SUCCESS
}
