/// Standard length of a working day in hours, before capacity scaling.
pub const STANDARD_WORKDAY_HOURS: f64 = 8.0;

pub const DEFAULT_CAPACITY: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct EstimationInput {
    /// Units of work left, e.g. story points not yet done.
    pub remaining_work: f64,
    /// Hours required per unit of work.
    pub rate: Option<f64>,
    /// Holidays as `YYYY-MM-DD` strings.
    pub excluded_dates: Vec<String>,
    /// Multiplier on [`STANDARD_WORKDAY_HOURS`].
    pub capacity: f64,
}

impl EstimationInput {
    pub fn new(remaining_work: f64, rate: Option<f64>) -> Self {
        Self {
            remaining_work,
            rate,
            excluded_dates: Vec::new(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    pub fn with_excluded_dates<I, S>(mut self, dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_dates = dates.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn required_hours(&self) -> Option<f64> {
        self.rate.map(|rate| self.remaining_work * rate)
    }

    pub fn hours_per_day(&self) -> f64 {
        STANDARD_WORKDAY_HOURS * self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_input_uses_full_capacity_and_no_holidays() {
        let input = EstimationInput::new(3.0, Some(4.0));
        assert_eq!(input.capacity, 1.0);
        assert!(input.excluded_dates.is_empty());
        assert_eq!(input.required_hours(), Some(12.0));
        assert_eq!(input.hours_per_day(), 8.0);
    }

    #[test]
    fn capacity_scales_the_standard_workday() {
        assert_eq!(EstimationInput::new(1.0, Some(1.0)).with_capacity(0.5).hours_per_day(), 4.0);
        assert_eq!(EstimationInput::new(1.0, Some(1.0)).with_capacity(2.0).hours_per_day(), 16.0);
    }

    #[test]
    fn missing_rate_has_no_required_hours() {
        assert_eq!(EstimationInput::new(3.0, None).required_hours(), None);
    }
}
