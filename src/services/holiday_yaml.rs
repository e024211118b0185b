use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::calendar::BusinessCalendar;
use crate::services::date_format::parse_iso_date;

#[derive(Error, Debug)]
pub enum HolidayYamlError {
    #[error("holiday calendar path not found: {0}")]
    PathNotFound(PathBuf),
    #[error("holiday calendar directory contains no yaml files: {0}")]
    DirectoryEmpty(PathBuf),
    #[error("failed to list holiday calendar directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to read holiday yaml file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse holiday yaml file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid date format in {path}: {value} (expected YYYY-MM-DD)")]
    InvalidDate { path: PathBuf, value: String },
    #[error(
        "invalid date range in {path}: start_date {start_date} is after end_date {end_date}"
    )]
    InvalidDateRange {
        path: PathBuf,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
}

#[derive(Debug, Deserialize)]
struct HolidayRecord {
    excluded_dates: Option<Vec<String>>,
    excluded_date_ranges: Option<Vec<DateRangeRecord>>,
}

#[derive(Debug, Deserialize)]
struct DateRangeRecord {
    start_date: String,
    end_date: String,
}

/// Loads holidays from a single YAML file, or from every `*.yaml` / `*.yml`
/// file in a directory, into one [`BusinessCalendar`].
///
/// # Errors
/// - Returns an error when `path` does not exist.
/// - Returns an error when a directory holds no YAML files.
/// - Returns an error on I/O or parse failures, or when content is invalid.
pub fn load_holidays<P: AsRef<Path>>(path: P) -> Result<BusinessCalendar, HolidayYamlError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(HolidayYamlError::PathNotFound(path.to_path_buf()));
    }
    if path.is_file() {
        return load_holiday_file(path);
    }

    let mut yaml_files = Vec::new();
    let read_dir = std::fs::read_dir(path).map_err(|source| HolidayYamlError::ReadDir {
        path: path.to_path_buf(),
        source,
    })?;
    for entry in read_dir {
        let entry = entry.map_err(|source| HolidayYamlError::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;
        let entry_path = entry.path();
        if entry_path.is_file() && is_yaml_file(&entry_path) {
            yaml_files.push(entry_path);
        }
    }
    yaml_files.sort();
    if yaml_files.is_empty() {
        return Err(HolidayYamlError::DirectoryEmpty(path.to_path_buf()));
    }

    let mut calendar = BusinessCalendar::new();
    for file_path in &yaml_files {
        calendar.merge(load_holiday_file(file_path)?);
    }
    Ok(calendar)
}

fn is_yaml_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn load_holiday_file(path: &Path) -> Result<BusinessCalendar, HolidayYamlError> {
    let contents = std::fs::read_to_string(path).map_err(|source| HolidayYamlError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let calendar = deserialize_holidays_from_yaml_str(&contents, path)?;
    debug!(path = %path.display(), holidays = calendar.excluded_dates.len(), "loaded holidays");
    Ok(calendar)
}

fn deserialize_holidays_from_yaml_str(
    input: &str,
    origin_path: &Path,
) -> Result<BusinessCalendar, HolidayYamlError> {
    if input.trim().is_empty() {
        return Ok(BusinessCalendar::new());
    }
    let record: HolidayRecord =
        serde_yaml::from_str(input).map_err(|source| HolidayYamlError::Parse {
            path: origin_path.to_path_buf(),
            source,
        })?;

    let mut calendar = BusinessCalendar::new();
    for value in record.excluded_dates.unwrap_or_default() {
        calendar.exclude(parse_date(&value, origin_path)?);
    }
    for range in record.excluded_date_ranges.unwrap_or_default() {
        for date in expand_date_range(range, origin_path)? {
            calendar.exclude(date);
        }
    }
    Ok(calendar)
}

fn expand_date_range(
    value: DateRangeRecord,
    origin_path: &Path,
) -> Result<Vec<NaiveDate>, HolidayYamlError> {
    let start_date = parse_date(&value.start_date, origin_path)?;
    let end_date = parse_date(&value.end_date, origin_path)?;
    if start_date > end_date {
        return Err(HolidayYamlError::InvalidDateRange {
            path: origin_path.to_path_buf(),
            start_date,
            end_date,
        });
    }
    Ok(start_date
        .iter_days()
        .take_while(|date| *date <= end_date)
        .collect())
}

fn parse_date(value: &str, origin_path: &Path) -> Result<NaiveDate, HolidayYamlError> {
    parse_iso_date(value).ok_or_else(|| HolidayYamlError::InvalidDate {
        path: origin_path.to_path_buf(),
        value: value.to_string(),
    })
}
