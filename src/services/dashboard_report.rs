use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::calendar::BusinessCalendar;
use crate::domain::dashboard::{Dashboard, Epic};
use crate::domain::estimation::EstimationInput;
use crate::services::capacity_store::CapacityStore;
use crate::services::completion_estimate::estimate_completion;
use crate::services::date_format::{format_iso_date, format_long_date};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EpicReport {
    pub id: String,
    pub title: String,
    pub stories_done_percent: f64,
    pub points_done_percent: f64,
    pub tasks_done_percent: f64,
    pub remaining_points: f64,
    pub capacity: f64,
    /// `YYYY-MM-DD`, empty when no projection can be made.
    pub projected_completion: String,
    pub projected_completion_display: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DashboardReport {
    pub name: String,
    pub generated_on: String,
    pub rate: Option<f64>,
    pub epics: Vec<EpicReport>,
}

/// Inputs shared by every epic of a report.
#[derive(Debug, Clone)]
pub struct ReportSettings<'a> {
    pub rate: Option<f64>,
    pub default_capacity: f64,
    pub holidays: &'a BusinessCalendar,
    pub capacities: &'a CapacityStore,
    pub today: NaiveDate,
}

pub fn build_dashboard_report(dashboard: &Dashboard, settings: &ReportSettings) -> DashboardReport {
    let mut calendar = BusinessCalendar::from_excluded_dates(&dashboard.excluded_dates);
    calendar.merge(settings.holidays.clone());
    let excluded_dates: Vec<String> = calendar.excluded_dates.into_iter().collect();

    let epics = dashboard
        .epics
        .iter()
        .map(|epic| build_epic_report(epic, &excluded_dates, settings))
        .collect();

    DashboardReport {
        name: dashboard.name.clone(),
        generated_on: format_iso_date(settings.today),
        rate: settings.rate,
        epics,
    }
}

fn build_epic_report(epic: &Epic, excluded_dates: &[String], settings: &ReportSettings) -> EpicReport {
    let capacity = resolve_capacity(epic, settings);
    let input = EstimationInput::new(epic.remaining_points(), settings.rate)
        .with_excluded_dates(excluded_dates.iter().cloned())
        .with_capacity(capacity);
    let projected_completion = estimate_completion(&input, settings.today)
        .map(format_iso_date)
        .unwrap_or_default();
    let projected_completion_display = format_long_date(&projected_completion);

    EpicReport {
        id: epic.id.clone(),
        title: epic.title.clone().unwrap_or_default(),
        stories_done_percent: epic.story_progress().percent(),
        points_done_percent: epic.point_progress().percent(),
        tasks_done_percent: epic.task_progress().percent(),
        remaining_points: epic.remaining_points(),
        capacity,
        projected_completion,
        projected_completion_display,
    }
}

/// Persisted capacity first, then the payload's, then the configured default.
fn resolve_capacity(epic: &Epic, settings: &ReportSettings) -> f64 {
    settings
        .capacities
        .get(&epic.id)
        .or(epic.capacity)
        .unwrap_or(settings.default_capacity)
}
