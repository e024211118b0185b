use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::dashboard::{Dashboard, Epic, Story, Task, WorkStatus};

#[derive(Error, Debug)]
pub enum DashboardJsonError {
    #[error("failed to read dashboard json: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse dashboard json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("missing {0} id")]
    MissingId(&'static str),
    #[error("invalid status value: {0}")]
    InvalidStatus(String),
    #[error("invalid story points for {id}: {value}")]
    InvalidPoints { id: String, value: f64 },
    #[error("invalid rate: {0}")]
    InvalidRate(f64),
    #[error("invalid capacity for {id}: {value}")]
    InvalidCapacity { id: String, value: f64 },
}

#[derive(Deserialize)]
struct DashboardRecord {
    #[serde(default)]
    name: String,
    #[serde(default, alias = "hours_per_point")]
    rate: Option<f64>,
    #[serde(default)]
    excluded_dates: Vec<String>,
    #[serde(default)]
    epics: Vec<EpicRecord>,
}

#[derive(Deserialize)]
struct EpicRecord {
    id: String,
    title: Option<String>,
    capacity: Option<f64>,
    #[serde(default)]
    stories: Vec<StoryRecord>,
}

#[derive(Deserialize)]
struct StoryRecord {
    id: String,
    title: Option<String>,
    points: Option<f64>,
    status: Option<String>,
    #[serde(default)]
    tasks: Vec<TaskRecord>,
}

#[derive(Deserialize)]
struct TaskRecord {
    id: String,
    title: Option<String>,
    status: Option<String>,
}

pub fn load_dashboard_from_json_file<P: AsRef<Path>>(
    path: P,
) -> Result<Dashboard, DashboardJsonError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_dashboard_from_json_str(&contents)
}

pub fn deserialize_dashboard_from_json_str(input: &str) -> Result<Dashboard, DashboardJsonError> {
    let record: DashboardRecord = serde_json::from_str(input)?;

    // A missing rate is allowed (no projection), a nonsensical one is not.
    if let Some(rate) = record.rate {
        if !rate.is_finite() || rate < 0.0 {
            return Err(DashboardJsonError::InvalidRate(rate));
        }
    }

    let epics = record
        .epics
        .into_iter()
        .map(epic_from_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Dashboard {
        name: record.name,
        rate: record.rate,
        excluded_dates: record.excluded_dates,
        epics,
    })
}

fn epic_from_record(record: EpicRecord) -> Result<Epic, DashboardJsonError> {
    let id = require_id(record.id, "epic")?;
    if let Some(capacity) = record.capacity {
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(DashboardJsonError::InvalidCapacity {
                id,
                value: capacity,
            });
        }
    }
    let stories = record
        .stories
        .into_iter()
        .map(story_from_record)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Epic {
        id,
        title: record.title,
        capacity: record.capacity,
        stories,
    })
}

fn story_from_record(record: StoryRecord) -> Result<Story, DashboardJsonError> {
    let id = require_id(record.id, "story")?;
    if let Some(points) = record.points {
        if !points.is_finite() || points < 0.0 {
            return Err(DashboardJsonError::InvalidPoints { id, value: points });
        }
    }
    let tasks = record
        .tasks
        .into_iter()
        .map(task_from_record)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Story {
        id,
        title: record.title,
        points: record.points,
        status: parse_status(record.status.as_deref())?,
        tasks,
    })
}

fn task_from_record(record: TaskRecord) -> Result<Task, DashboardJsonError> {
    Ok(Task {
        id: require_id(record.id, "task")?,
        title: record.title,
        status: parse_status(record.status.as_deref())?,
    })
}

fn require_id(id: String, kind: &'static str) -> Result<String, DashboardJsonError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(DashboardJsonError::MissingId(kind));
    }
    Ok(trimmed.to_string())
}

fn parse_status(value: Option<&str>) -> Result<WorkStatus, DashboardJsonError> {
    match value {
        None => Ok(WorkStatus::ToDo),
        Some(value) => {
            WorkStatus::parse(value).ok_or_else(|| DashboardJsonError::InvalidStatus(value.to_string()))
        }
    }
}
