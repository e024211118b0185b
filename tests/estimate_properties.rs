//! Property tests for the completion estimator.
//!
//! Today is pinned to a generated date so results do not depend on the clock.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;

use mission_control::domain::estimation::EstimationInput;
use mission_control::services::completion_estimate::estimate_completion;

fn today_strategy() -> impl Strategy<Value = NaiveDate> {
    let base = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    (0i64..730).prop_map(move |offset| base + Duration::days(offset))
}

/// Up to a dozen holidays spread over the generated range of days.
fn holidays_strategy() -> impl Strategy<Value = Vec<String>> {
    let base = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    prop::collection::vec(0i64..860, 0..12).prop_map(move |offsets| {
        offsets
            .into_iter()
            .map(|offset| (base + Duration::days(offset)).format("%Y-%m-%d").to_string())
            .collect()
    })
}

proptest! {
    #[test]
    fn no_remaining_work_never_has_a_result(
        remaining in -100.0f64..=0.0,
        rate in 0.1f64..20.0,
        capacity in 0.1f64..3.0,
        today in today_strategy(),
    ) {
        let input = EstimationInput::new(remaining, Some(rate)).with_capacity(capacity);
        prop_assert_eq!(estimate_completion(&input, today), None);
    }

    #[test]
    fn non_positive_or_missing_rate_never_has_a_result(
        remaining in 0.1f64..100.0,
        rate in prop::option::of(-20.0f64..=0.0),
        today in today_strategy(),
    ) {
        let input = EstimationInput::new(remaining, rate);
        prop_assert_eq!(estimate_completion(&input, today), None);
    }

    #[test]
    fn zero_capacity_never_has_a_result(
        remaining in 0.1f64..100.0,
        rate in 0.1f64..20.0,
        today in today_strategy(),
    ) {
        let input = EstimationInput::new(remaining, Some(rate)).with_capacity(0.0);
        prop_assert_eq!(estimate_completion(&input, today), None);
    }

    #[test]
    fn result_is_a_later_business_day(
        remaining in 0.1f64..60.0,
        rate in 0.5f64..16.0,
        capacity in 0.25f64..3.0,
        holidays in holidays_strategy(),
        today in today_strategy(),
    ) {
        let input = EstimationInput::new(remaining, Some(rate))
            .with_excluded_dates(holidays.clone())
            .with_capacity(capacity);
        let result = estimate_completion(&input, today).expect("projection for positive inputs");

        prop_assert!(result > today);
        prop_assert!(!matches!(result.weekday(), Weekday::Sat | Weekday::Sun));
        prop_assert!(!holidays.contains(&result.format("%Y-%m-%d").to_string()));
    }

    #[test]
    fn more_remaining_work_never_finishes_earlier(
        remaining in 0.1f64..60.0,
        extra in 0.0f64..30.0,
        rate in 0.5f64..16.0,
        holidays in holidays_strategy(),
        today in today_strategy(),
    ) {
        let smaller = EstimationInput::new(remaining, Some(rate)).with_excluded_dates(holidays.clone());
        let larger = EstimationInput::new(remaining + extra, Some(rate)).with_excluded_dates(holidays);

        prop_assert!(estimate_completion(&larger, today) >= estimate_completion(&smaller, today));
    }

    #[test]
    fn more_capacity_never_finishes_later(
        remaining in 0.1f64..60.0,
        rate in 0.5f64..16.0,
        capacity in 0.25f64..2.0,
        extra in 0.0f64..2.0,
        holidays in holidays_strategy(),
        today in today_strategy(),
    ) {
        let slower = EstimationInput::new(remaining, Some(rate))
            .with_excluded_dates(holidays.clone())
            .with_capacity(capacity);
        let faster = EstimationInput::new(remaining, Some(rate))
            .with_excluded_dates(holidays)
            .with_capacity(capacity + extra);

        prop_assert!(estimate_completion(&faster, today) <= estimate_completion(&slower, today));
    }

    #[test]
    fn half_capacity_doubles_business_days_on_a_plain_calendar(
        days in 1u32..20,
        today in today_strategy(),
    ) {
        // Whole days of work at full capacity, no holidays.
        let full = EstimationInput::new(f64::from(days), Some(8.0));
        let half = full.clone().with_capacity(0.5);
        let double = EstimationInput::new(f64::from(days * 2), Some(8.0));

        prop_assert_eq!(estimate_completion(&half, today), estimate_completion(&double, today));
    }
}
