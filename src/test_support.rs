use chrono::NaiveDate;

use crate::domain::dashboard::{Epic, Story, WorkStatus};

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn build_story(id: &str, points: Option<f64>, status: WorkStatus) -> Story {
    Story {
        id: id.to_string(),
        title: Some(format!("Story {id}")),
        points,
        status,
        tasks: Vec::new(),
    }
}

pub fn build_epic(id: &str, stories: Vec<Story>) -> Epic {
    Epic {
        id: id.to_string(),
        title: Some(format!("Epic {id}")),
        capacity: None,
        stories,
    }
}
