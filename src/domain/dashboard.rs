use crate::domain::progress::Progress;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WorkStatus {
	#[default]
	ToDo,
	InProgress,
	Done,
}

impl WorkStatus {
	pub fn parse(value: &str) -> Option<Self> {
		match value.trim().to_ascii_lowercase().as_str() {
			"todo" | "to do" | "to_do" | "open" => Some(WorkStatus::ToDo),
			"in_progress" | "in progress" | "in-progress" => Some(WorkStatus::InProgress),
			"done" | "complete" | "completed" => Some(WorkStatus::Done),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Task {
	pub id: String,
	pub title: Option<String>,
	pub status: WorkStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Story {
	pub id: String,
	pub title: Option<String>,
	pub points: Option<f64>,
	pub status: WorkStatus,
	pub tasks: Vec<Task>,
}

impl Story {
	pub fn is_done(&self) -> bool {
		self.status == WorkStatus::Done
	}

	pub fn point_value(&self) -> f64 {
		self.points.unwrap_or(0.0)
	}

	pub fn task_progress(&self) -> Progress {
		let done = self
			.tasks
			.iter()
			.filter(|task| task.status == WorkStatus::Done)
			.count();
		Progress::new(done as f64, self.tasks.len() as f64)
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Epic {
	pub id: String,
	pub title: Option<String>,
	pub capacity: Option<f64>,
	pub stories: Vec<Story>,
}

impl Epic {
	pub fn story_progress(&self) -> Progress {
		let done = self.stories.iter().filter(|story| story.is_done()).count();
		Progress::new(done as f64, self.stories.len() as f64)
	}

	pub fn point_progress(&self) -> Progress {
		self.stories
			.iter()
			.map(|story| {
				let points = story.point_value();
				let completed = if story.is_done() { points } else { 0.0 };
				Progress::new(completed, points)
			})
			.sum()
	}

	pub fn task_progress(&self) -> Progress {
		self.stories.iter().map(Story::task_progress).sum()
	}

	pub fn remaining_points(&self) -> f64 {
		self.stories
			.iter()
			.filter(|story| !story.is_done())
			.map(Story::point_value)
			.fold(0.0, |acc, points| acc + points)
	}
}

/// A dashboard payload: project-wide estimation settings plus the epic tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
	pub name: String,
	pub rate: Option<f64>,
	pub excluded_dates: Vec<String>,
	pub epics: Vec<Epic>,
}
