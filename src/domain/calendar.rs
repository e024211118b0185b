use std::collections::BTreeSet;

use chrono::Datelike;
use chrono::NaiveDate;
use chrono::Weekday;

use crate::services::date_format::format_iso_date;

/// Upper bound on how many calendar days any walk over the calendar may take.
/// Ordinary holiday lists are short, so hitting this means the input is unbounded.
pub const MAX_SIMULATED_DAYS: usize = 36_600;

/// Working calendar: Monday to Friday, minus a set of excluded dates (holidays).
///
/// Excluded dates are kept as `YYYY-MM-DD` strings and matched exactly against
/// the formatted candidate date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessCalendar {
    pub excluded_dates: BTreeSet<String>,
}

impl BusinessCalendar {
    pub fn new() -> Self {
        Self {
            excluded_dates: BTreeSet::new(),
        }
    }

    pub fn from_excluded_dates<I, S>(dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let excluded_dates = dates
            .into_iter()
            .map(|date| date.as_ref().trim().to_string())
            .filter(|date| !date.is_empty())
            .collect();
        Self { excluded_dates }
    }

    pub fn exclude(&mut self, date: NaiveDate) {
        self.excluded_dates.insert(format_iso_date(date));
    }

    pub fn merge(&mut self, other: BusinessCalendar) {
        self.excluded_dates.extend(other.excluded_dates);
    }

    pub fn is_excluded(&self, date: NaiveDate) -> bool {
        self.excluded_dates.contains(&format_iso_date(date))
    }

    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !is_weekend(date) && !self.is_excluded(date)
    }

    /// First business day strictly after `date`.
    ///
    /// Returns `None` when chrono's date range ends or no business day shows up
    /// within [`MAX_SIMULATED_DAYS`].
    pub fn next_business_day_after(&self, date: NaiveDate) -> Option<NaiveDate> {
        let mut candidate = date;
        for _ in 0..MAX_SIMULATED_DAYS {
            candidate = candidate.succ_opt()?;
            if self.is_business_day(candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::on_date;

    #[test]
    fn a_default_calendar_has_business_days_on_weekdays_only() {
        let test_cases = vec![
            (on_date(2026, 2, 16), true),  // Monday
            (on_date(2026, 2, 17), true),  // Tuesday
            (on_date(2026, 2, 18), true),  // Wednesday
            (on_date(2026, 2, 19), true),  // Thursday
            (on_date(2026, 2, 20), true),  // Friday
            (on_date(2026, 2, 21), false), // Saturday
            (on_date(2026, 2, 22), false), // Sunday
        ];

        let calendar = BusinessCalendar::new();

        for (date, expected) in test_cases {
            assert_eq!(
                calendar.is_business_day(date),
                expected,
                "Expected business day = {} on {}",
                expected,
                date
            );
        }
    }

    #[test]
    fn excluded_dates_are_not_business_days() {
        let calendar = BusinessCalendar::from_excluded_dates(["2026-02-18", " 2026-02-21 "]);

        assert!(calendar.is_business_day(on_date(2026, 2, 17)));
        assert!(!calendar.is_business_day(on_date(2026, 2, 18)));
        assert!(calendar.is_business_day(on_date(2026, 2, 19)));
        assert!(calendar.is_excluded(on_date(2026, 2, 21)));
    }

    #[test]
    fn duplicate_and_unordered_dates_are_harmless() {
        let calendar =
            BusinessCalendar::from_excluded_dates(["2026-02-20", "2026-02-18", "2026-02-20", ""]);

        assert_eq!(calendar.excluded_dates.len(), 2);
        assert!(!calendar.is_business_day(on_date(2026, 2, 18)));
        assert!(!calendar.is_business_day(on_date(2026, 2, 20)));
    }

    #[test]
    fn excluded_dates_match_exact_iso_strings_only() {
        // Unpadded strings never match a formatted date.
        let calendar = BusinessCalendar::from_excluded_dates(["2026-2-18"]);
        assert!(calendar.is_business_day(on_date(2026, 2, 18)));
    }

    #[test]
    fn next_business_day_after_skips_weekends_and_holidays() {
        let mut calendar = BusinessCalendar::new();
        // Friday -> Monday
        assert_eq!(
            calendar.next_business_day_after(on_date(2026, 2, 20)),
            Some(on_date(2026, 2, 23))
        );

        calendar.exclude(on_date(2026, 2, 23));
        assert_eq!(
            calendar.next_business_day_after(on_date(2026, 2, 20)),
            Some(on_date(2026, 2, 24))
        );
    }

    #[test]
    fn next_business_day_after_is_strictly_later() {
        let calendar = BusinessCalendar::new();
        let wednesday = on_date(2026, 2, 18);
        assert_eq!(
            calendar.next_business_day_after(wednesday),
            Some(on_date(2026, 2, 19))
        );
    }

    #[test]
    fn next_business_day_after_returns_none_at_end_of_date_range() {
        let calendar = BusinessCalendar::new();
        assert_eq!(calendar.next_business_day_after(NaiveDate::MAX), None);
    }

    #[test]
    fn merge_combines_excluded_dates() {
        let mut calendar = BusinessCalendar::from_excluded_dates(["2026-12-24"]);
        calendar.merge(BusinessCalendar::from_excluded_dates(["2026-12-25", "2026-12-24"]));

        assert_eq!(calendar.excluded_dates.len(), 2);
        assert!(!calendar.is_business_day(on_date(2026, 12, 25)));
    }
}
