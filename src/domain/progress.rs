use serde::Serialize;

/// Completed amount out of a total, as drawn by a progress bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Progress {
    pub completed: f64,
    pub total: f64,
}

impl Progress {
    pub fn new(completed: f64, total: f64) -> Self {
        Self { completed, total }
    }

    /// Percentage in `[0, 100]`; an empty total counts as no progress.
    pub fn percent(&self) -> f64 {
        if self.total <= 0.0 {
            return 0.0;
        }
        (self.completed / self.total * 100.0).clamp(0.0, 100.0)
    }
}

impl std::ops::Add for Progress {
    type Output = Progress;

    fn add(self, other: Progress) -> Progress {
        Progress::new(self.completed + other.completed, self.total + other.total)
    }
}

impl std::iter::Sum for Progress {
    fn sum<I: Iterator<Item = Progress>>(iter: I) -> Progress {
        iter.fold(Progress::default(), |acc, item| acc + item)
    }
}
