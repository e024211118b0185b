pub mod calendar;
pub mod dashboard;
pub mod estimation;
pub mod progress;
