use chrono::NaiveDate;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const LONG_DATE_FORMAT: &str = "%A, %B %-d";

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).ok()
}

/// Renders an ISO date as weekday, month and day, e.g. `Friday, October 23`.
///
/// Empty or unparseable input renders as an empty string.
pub fn format_long_date(iso_date: &str) -> String {
    parse_iso_date(iso_date)
        .map(|date| date.format(LONG_DATE_FORMAT).to_string())
        .unwrap_or_default()
}
