use assert_fs::prelude::*;
use chrono::NaiveDate;

use mission_control::domain::estimation::EstimationInput;
use mission_control::services::completion_estimate::estimate_completion;
use mission_control::services::holiday_yaml::load_holidays;

#[test]
fn loads_holidays_from_yaml_directory_and_skips_them() {
    let temp = assert_fs::TempDir::new().unwrap();

    temp.child("public.yaml")
        .write_str("excluded_dates: [2026-12-24, 2026-12-25]\n")
        .unwrap();
    temp.child("team.yml")
        .write_str(
            r#"excluded_date_ranges:
  - start_date: 2026-12-28
    end_date: 2026-12-31
"#,
        )
        .unwrap();

    let calendar = load_holidays(temp.path()).unwrap();
    assert_eq!(calendar.excluded_dates.len(), 6);

    // Wednesday 2026-12-23: every remaining business day of the year is off.
    let today = NaiveDate::from_ymd_opt(2026, 12, 23).unwrap();
    let input = EstimationInput::new(1.0, Some(8.0)).with_excluded_dates(calendar.excluded_dates);

    // Start Fri 2027-01-01, raw completion there, result Mon 2027-01-04.
    assert_eq!(
        estimate_completion(&input, today),
        NaiveDate::from_ymd_opt(2027, 1, 4)
    );
}
