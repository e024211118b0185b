//! Projected completion date for a quantity of remaining work.
//!
//! Remaining work is converted to hours (`remaining_work * rate`) and consumed
//! day by day on a business-day calendar at `8 * capacity` hours per day,
//! starting with the first business day after today. The projected date is the
//! first business day after the day the last hour is consumed.
//!
//! Degenerate inputs (no rate, no work left, zero capacity) produce no date
//! rather than an error.

use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::calendar::{BusinessCalendar, MAX_SIMULATED_DAYS};
use crate::domain::estimation::EstimationInput;
use crate::services::date_format::format_iso_date;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EstimationError {
    #[error("no business day found after {after}")]
    NoBusinessDay { after: NaiveDate },
    #[error("remaining work not consumed within {days} simulated days")]
    CalendarExhausted { days: usize },
    #[error("date range ended while simulating from {from}")]
    DateOverflow { from: NaiveDate },
}

/// Projected completion date, or `None` when the inputs do not support one.
///
/// Internal failures (an unbounded calendar, the end of the date range) are
/// logged and also reported as `None`.
pub fn estimate_completion(input: &EstimationInput, today: NaiveDate) -> Option<NaiveDate> {
    match try_estimate_completion(input, today) {
        Ok(result) => result,
        Err(e) => {
            warn!(
                error = %e,
                remaining_work = input.remaining_work,
                capacity = input.capacity,
                "completion estimate abandoned"
            );
            None
        }
    }
}

/// Same as [`estimate_completion`] with today taken from the local clock.
pub fn estimate_completion_from_today(input: &EstimationInput) -> Option<NaiveDate> {
    let today = Local::now().date_naive();
    estimate_completion(input, today)
}

/// `YYYY-MM-DD` projected completion date, or an empty string for no result.
pub fn estimate_completion_iso<I, S>(
    remaining_work: f64,
    rate: Option<f64>,
    excluded_dates: I,
    capacity: f64,
    today: NaiveDate,
) -> String
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let input = EstimationInput::new(remaining_work, rate)
        .with_excluded_dates(excluded_dates)
        .with_capacity(capacity);
    estimate_completion(&input, today)
        .map(format_iso_date)
        .unwrap_or_default()
}

pub fn try_estimate_completion(
    input: &EstimationInput,
    today: NaiveDate,
) -> Result<Option<NaiveDate>, EstimationError> {
    if !(input.capacity > 0.0) {
        return Ok(None);
    }
    if !input.rate.is_some_and(|rate| rate > 0.0) {
        return Ok(None);
    }
    if !(input.remaining_work > 0.0) {
        return Ok(None);
    }
    let Some(mut remaining_hours) = input.required_hours() else {
        return Ok(None);
    };

    let calendar = BusinessCalendar::from_excluded_dates(&input.excluded_dates);
    let hours_per_day = input.hours_per_day();

    let start_date = calendar
        .next_business_day_after(today)
        .ok_or(EstimationError::NoBusinessDay { after: today })?;
    let raw_completion = consume_hours(&calendar, start_date, &mut remaining_hours, hours_per_day)?;

    let completion = calendar
        .next_business_day_after(raw_completion)
        .ok_or(EstimationError::NoBusinessDay {
            after: raw_completion,
        })?;

    debug!(
        %today,
        %start_date,
        %raw_completion,
        %completion,
        hours_per_day,
        "projected completion"
    );
    Ok(Some(completion))
}

/// Walks the calendar from `start_date`, subtracting a day's hours on each
/// business day, and returns the day on which the hours run out.
fn consume_hours(
    calendar: &BusinessCalendar,
    start_date: NaiveDate,
    remaining_hours: &mut f64,
    hours_per_day: f64,
) -> Result<NaiveDate, EstimationError> {
    let mut date = start_date;
    for _ in 0..MAX_SIMULATED_DAYS {
        if calendar.is_business_day(date) {
            *remaining_hours -= hours_per_day;
        }
        if *remaining_hours <= 0.0 {
            return Ok(date);
        }
        date = date
            .succ_opt()
            .ok_or(EstimationError::DateOverflow { from: start_date })?;
    }
    Err(EstimationError::CalendarExhausted {
        days: MAX_SIMULATED_DAYS,
    })
}
